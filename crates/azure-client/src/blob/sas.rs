//! Service SAS signing for individual blobs.
//!
//! Signature = base64(HMAC-SHA256(account key, string-to-sign)) using the
//! string-to-sign layout of service version 2020-12-06 and later.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use chrono::{DateTime, Utc};
use hmac::{Hmac, Mac};
use sha2::Sha256;

use crate::AzureError;

type HmacSha256 = Hmac<Sha256>;

pub const SAS_VERSION: &str = "2022-11-02";

/// Allowed protocols (`spr`) for a SAS.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SasProtocol {
    #[default]
    Https,
    /// Needed for plain-http endpoints such as a local storage emulator.
    HttpsAndHttp,
}

impl SasProtocol {
    /// `HttpsAndHttp` for `http://` endpoints, `Https` otherwise.
    pub fn for_endpoint(endpoint: &str) -> Self {
        if endpoint.starts_with("http://") {
            SasProtocol::HttpsAndHttp
        } else {
            SasProtocol::Https
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SasProtocol::Https => "https",
            SasProtocol::HttpsAndHttp => "https,http",
        }
    }
}

/// Permissions granted by a blob SAS.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BlobPermissions {
    pub read: bool,
    pub add: bool,
    pub create: bool,
    pub write: bool,
    pub delete: bool,
}

impl BlobPermissions {
    pub const READ: Self = Self {
        read: true,
        add: false,
        create: false,
        write: false,
        delete: false,
    };

    /// Create or overwrite, no read-back.
    pub const UPLOAD: Self = Self {
        read: false,
        add: false,
        create: true,
        write: true,
        delete: false,
    };

    /// Read, create and write, handed to browsers that upload directly.
    pub const READ_UPLOAD: Self = Self {
        read: true,
        add: false,
        create: true,
        write: true,
        delete: false,
    };

    /// Permission letters in the order the service requires.
    pub fn as_sas_string(&self) -> String {
        [
            (self.read, 'r'),
            (self.add, 'a'),
            (self.create, 'c'),
            (self.write, 'w'),
            (self.delete, 'd'),
        ]
        .iter()
        .filter(|(on, _)| *on)
        .map(|(_, c)| *c)
        .collect()
    }
}

/// Format a SAS timestamp (UTC, second precision).
pub fn sas_time(t: &DateTime<Utc>) -> String {
    t.format("%Y-%m-%dT%H:%M:%SZ").to_string()
}

/// Fields of one blob SAS before signing.
#[derive(Debug, Clone)]
pub struct SasParams<'a> {
    pub account: &'a str,
    pub container: &'a str,
    pub blob: &'a str,
    pub permissions: BlobPermissions,
    pub expiry: DateTime<Utc>,
    pub protocol: SasProtocol,
}

impl SasParams<'_> {
    pub fn canonical_resource(&self) -> String {
        format!("/blob/{}/{}/{}", self.account, self.container, self.blob)
    }

    pub fn string_to_sign(&self) -> String {
        [
            self.permissions.as_sas_string().as_str(),
            "",
            sas_time(&self.expiry).as_str(),
            self.canonical_resource().as_str(),
            "",
            "",
            self.protocol.as_str(),
            SAS_VERSION,
            "b",
            "",
            "",
            "",
            "",
            "",
            "",
            "",
        ]
        .join("\n")
    }

    /// Sign with the decoded account key and return the SAS query pairs.
    pub fn sign(&self, key: &[u8]) -> Result<Vec<(&'static str, String)>, AzureError> {
        let mut mac = HmacSha256::new_from_slice(key).map_err(|_| AzureError::InvalidAccountKey)?;
        mac.update(self.string_to_sign().as_bytes());
        let signature = BASE64.encode(mac.finalize().into_bytes());

        Ok(vec![
            ("sv", SAS_VERSION.to_string()),
            ("sr", "b".to_string()),
            ("sp", self.permissions.as_sas_string()),
            ("se", sas_time(&self.expiry)),
            ("spr", self.protocol.as_str().to_string()),
            ("sig", signature),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn params() -> SasParams<'static> {
        SasParams {
            account: "devacct",
            container: "uploads",
            blob: "photo.png",
            permissions: BlobPermissions::READ,
            expiry: Utc.with_ymd_and_hms(2030, 1, 2, 3, 4, 5).unwrap(),
            protocol: SasProtocol::Https,
        }
    }

    #[test]
    fn permission_letters_follow_service_order() {
        assert_eq!(BlobPermissions::READ.as_sas_string(), "r");
        assert_eq!(BlobPermissions::UPLOAD.as_sas_string(), "cw");
        assert_eq!(BlobPermissions::READ_UPLOAD.as_sas_string(), "rcw");
        let all = BlobPermissions {
            read: true,
            add: true,
            create: true,
            write: true,
            delete: true,
        };
        assert_eq!(all.as_sas_string(), "racwd");
    }

    #[test]
    fn string_to_sign_has_sixteen_fields() {
        let sts = params().string_to_sign();
        assert_eq!(
            sts,
            "r\n\n2030-01-02T03:04:05Z\n/blob/devacct/uploads/photo.png\n\n\nhttps\n2022-11-02\nb\n\n\n\n\n\n\n"
        );
        assert_eq!(sts.split('\n').count(), 16);
    }

    #[test]
    fn signature_matches_reference_vector() {
        let pairs = params().sign(b"test-account-key-0123456789abcdef").unwrap();
        let sig = pairs.iter().find(|(k, _)| *k == "sig").unwrap();
        assert_eq!(sig.1, "OnwSNBeTzdKwKtQ4DVnt5cdsONRAQVGDTcRrrwDlY28=");
        let se = pairs.iter().find(|(k, _)| *k == "se").unwrap();
        assert_eq!(se.1, "2030-01-02T03:04:05Z");
    }

    #[test]
    fn protocol_follows_endpoint_scheme() {
        assert_eq!(
            SasProtocol::for_endpoint("https://devacct.blob.core.windows.net"),
            SasProtocol::Https
        );
        assert_eq!(
            SasProtocol::for_endpoint("http://127.0.0.1:10000/devstoreaccount1"),
            SasProtocol::HttpsAndHttp
        );
    }

    #[test]
    fn http_protocol_is_signed_and_sent() {
        let emulator = SasParams {
            protocol: SasProtocol::HttpsAndHttp,
            ..params()
        };
        let sts = emulator.string_to_sign();
        assert_eq!(sts.split('\n').nth(6), Some("https,http"));
        let pairs = emulator.sign(b"test-account-key-0123456789abcdef").unwrap();
        let spr = pairs.iter().find(|(k, _)| *k == "spr").unwrap();
        assert_eq!(spr.1, "https,http");
        let sig = pairs.iter().find(|(k, _)| *k == "sig").unwrap();
        assert_ne!(sig.1, "OnwSNBeTzdKwKtQ4DVnt5cdsONRAQVGDTcRrrwDlY28=");
    }
}
