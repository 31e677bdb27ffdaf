//! Azure Blob Storage uploads and SAS URL issuance.
//!
//! Uploads authenticate with a short-lived create/write SAS signed locally
//! from the account key, so no Shared Key request signing is needed.

mod sas;

pub use sas::{BlobPermissions, SAS_VERSION, SasParams, SasProtocol, sas_time};

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use chrono::{DateTime, Duration, Utc};
use reqwest::header::CONTENT_TYPE;
use url::Url;

use crate::AzureError;
use crate::request::read_text;

/// Lifetime of the SAS used for the upload PUT itself.
const UPLOAD_SAS_LIFETIME_MINUTES: i64 = 15;

/// Longest extension kept from a client-supplied filename.
const MAX_EXTENSION_LEN: usize = 10;

/// Storage account credentials parsed from a connection string.
#[derive(Clone)]
pub struct StorageAccount {
    pub name: String,
    key: Vec<u8>,
    pub blob_endpoint: String,
}

impl std::fmt::Debug for StorageAccount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StorageAccount")
            .field("name", &self.name)
            .field("key", &"<redacted>")
            .field("blob_endpoint", &self.blob_endpoint)
            .finish()
    }
}

impl StorageAccount {
    /// Parse `AccountName=..;AccountKey=..;EndpointSuffix=..` style strings.
    pub fn from_connection_string(conn: &str) -> Result<Self, AzureError> {
        let mut name = None;
        let mut key = None;
        let mut protocol = "https";
        let mut suffix = "core.windows.net";
        let mut blob_endpoint = None;

        for part in conn.split(';').map(str::trim).filter(|p| !p.is_empty()) {
            let (k, v) = part.split_once('=').ok_or_else(|| {
                AzureError::InvalidConnectionString("segment without '='".into())
            })?;
            match k {
                "AccountName" => name = Some(v),
                "AccountKey" => key = Some(v),
                "DefaultEndpointsProtocol" => protocol = v,
                "EndpointSuffix" => suffix = v,
                "BlobEndpoint" => blob_endpoint = Some(v),
                _ => {}
            }
        }

        let name = name
            .filter(|n| !n.is_empty())
            .ok_or_else(|| AzureError::InvalidConnectionString("missing AccountName".into()))?;
        let key = key
            .filter(|k| !k.is_empty())
            .ok_or_else(|| AzureError::InvalidConnectionString("missing AccountKey".into()))?;
        let key = BASE64
            .decode(key)
            .map_err(|_| AzureError::InvalidAccountKey)?;

        let blob_endpoint = match blob_endpoint {
            Some(ep) => ep.trim_end_matches('/').to_string(),
            None => format!("{protocol}://{name}.blob.{suffix}"),
        };

        Ok(Self {
            name: name.to_string(),
            key,
            blob_endpoint,
        })
    }
}

/// One container of a storage account.
#[derive(Clone, Debug)]
pub struct BlobContainer {
    http: reqwest::Client,
    account: StorageAccount,
    container: String,
    read_expiry: Duration,
}

impl BlobContainer {
    /// `read_expiry` is the lifetime of SAS URLs handed back to callers.
    pub fn new(account: StorageAccount, container: String, read_expiry: Duration) -> Self {
        Self::with_http(reqwest::Client::new(), account, container, read_expiry)
    }

    pub fn with_http(
        http: reqwest::Client,
        account: StorageAccount,
        container: String,
        read_expiry: Duration,
    ) -> Self {
        Self {
            http,
            account,
            container,
            read_expiry,
        }
    }

    pub fn name(&self) -> &str {
        &self.container
    }

    /// Unsigned URL of a blob in this container.
    pub fn blob_url(&self, blob: &str) -> Result<Url, AzureError> {
        Ok(Url::parse(&format!(
            "{}/{}/{}",
            self.account.blob_endpoint, self.container, blob
        ))?)
    }

    /// Signed URL granting `permissions` on `blob` until `expiry`.
    pub fn sas_url(
        &self,
        blob: &str,
        permissions: BlobPermissions,
        expiry: DateTime<Utc>,
    ) -> Result<Url, AzureError> {
        let params = SasParams {
            account: &self.account.name,
            container: &self.container,
            blob,
            permissions,
            expiry,
            protocol: SasProtocol::for_endpoint(&self.account.blob_endpoint),
        };
        let pairs = params.sign(&self.account.key)?;

        let mut url = self.blob_url(blob)?;
        {
            let mut query = url.query_pairs_mut();
            for (k, v) in &pairs {
                query.append_pair(k, v);
            }
        }
        Ok(url)
    }

    /// Upload `data` under a fresh `.png` name and return a read-only SAS URL.
    pub async fn upload_png(&self, data: Vec<u8>) -> Result<Url, AzureError> {
        let blob = unique_blob_name(Some("png"));
        self.upload(&blob, data, "image/png").await?;
        self.sas_url(&blob, BlobPermissions::READ, Utc::now() + self.read_expiry)
    }

    /// PUT `data` as a block blob named `blob`.
    pub async fn upload(&self, blob: &str, data: Vec<u8>, content_type: &str) -> Result<(), AzureError> {
        let expiry = Utc::now() + Duration::minutes(UPLOAD_SAS_LIFETIME_MINUTES);
        let url = self.sas_url(blob, BlobPermissions::UPLOAD, expiry)?;
        let size = data.len();

        let resp = self
            .http
            .put(url)
            .header("x-ms-blob-type", "BlockBlob")
            .header("x-ms-version", SAS_VERSION)
            .header(CONTENT_TYPE, content_type)
            .body(data)
            .send()
            .await?;
        read_text(resp).await?;

        tracing::info!(container = %self.container, blob, size, "Blob uploaded");
        Ok(())
    }

    /// Reserve a unique name for a browser upload and sign it for read/create/write.
    ///
    /// The original filename only contributes its extension.
    pub fn prepare_upload(&self, filename: &str) -> Result<Url, AzureError> {
        let blob = unique_blob_name(file_extension(filename));
        self.sas_url(
            &blob,
            BlobPermissions::READ_UPLOAD,
            Utc::now() + self.read_expiry,
        )
    }
}

/// Random hex blob name with an optional extension.
pub fn unique_blob_name(extension: Option<&str>) -> String {
    let id = uuid::Uuid::new_v4().simple().to_string();
    match extension {
        Some(ext) => format!("{id}.{ext}"),
        None => id,
    }
}

/// Extension of `filename` if it is short and plain alphanumeric.
fn file_extension(filename: &str) -> Option<&str> {
    let (_, ext) = filename.rsplit_once('.')?;
    let valid = !ext.is_empty()
        && ext.len() <= MAX_EXTENSION_LEN
        && ext.chars().all(|c| c.is_ascii_alphanumeric());
    valid.then_some(ext)
}
