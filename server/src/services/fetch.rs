//! Download of caller-supplied image URLs.

use std::time::Duration;

use azure_client::redact_url;

use super::ServiceError;

const FETCH_TIMEOUT: Duration = Duration::from_secs(30);

/// GET `url` and return the body bytes.
pub async fn fetch_image(http: &reqwest::Client, url: &str) -> Result<Vec<u8>, ServiceError> {
    let fail = |reason: String| ServiceError::Fetch {
        url: redact_url(url).to_string(),
        reason,
    };

    let resp = http
        .get(url)
        .timeout(FETCH_TIMEOUT)
        .send()
        .await
        .map_err(|e| fail(e.to_string()))?;

    let status = resp.status();
    if !status.is_success() {
        return Err(fail(format!("status {}", status.as_u16())));
    }

    let bytes = resp.bytes().await.map_err(|e| fail(e.to_string()))?;
    tracing::debug!(url = redact_url(url), size = bytes.len(), "Fetched image");
    Ok(bytes.to_vec())
}
