use serde::de::DeserializeOwned;

use crate::{AzureError, redact_url};

/// Read a response body as text, failing on non-success statuses.
pub(crate) async fn read_text(resp: reqwest::Response) -> Result<String, AzureError> {
    let status = resp.status();
    let url = resp.url().to_string();
    let body = resp.text().await?;

    if !status.is_success() {
        tracing::warn!(url = redact_url(&url), status = status.as_u16(), "Azure request failed");
        return Err(AzureError::ApiError {
            status: status.as_u16(),
            message: body,
        });
    }

    Ok(body)
}

/// Read and deserialize a JSON response body.
pub(crate) async fn read_json<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, AzureError> {
    let body = read_text(resp).await?;
    Ok(serde_json::from_str(&body)?)
}

/// Read a binary response body, failing on non-success statuses.
pub(crate) async fn read_bytes(resp: reqwest::Response) -> Result<Vec<u8>, AzureError> {
    let status = resp.status();
    if !status.is_success() {
        let url = resp.url().to_string();
        let body = resp.text().await?;
        tracing::warn!(url = redact_url(&url), status = status.as_u16(), "Azure request failed");
        return Err(AzureError::ApiError {
            status: status.as_u16(),
            message: body,
        });
    }

    Ok(resp.bytes().await?.to_vec())
}

/// Join a configured endpoint and a path without doubling slashes.
pub(crate) fn join_endpoint(endpoint: &str, path: &str) -> String {
    format!(
        "{}/{}",
        endpoint.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}
