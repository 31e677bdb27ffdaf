//! Clients for the hosted Azure services behind the content pipeline.
//!
//! Provides the Vision image-analysis client (smart crop, background
//! removal, color analysis), the Azure OpenAI client (chat completions,
//! image generation), and Blob Storage uploads with SAS URL signing.

pub mod blob;
pub mod openai;
pub mod vision;

mod request;

pub use blob::{BlobContainer, BlobPermissions, StorageAccount};
pub use openai::{ChatMessage, ChatRequest, ImageRequest, OpenAiClient};
pub use vision::{BoundingBox, ColorAnalysis, VisionClient};

/// Unified error type for the azure-client crate.
#[derive(Debug, thiserror::Error)]
pub enum AzureError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Azure API error (status {status}): {message}")]
    ApiError { status: u16, message: String },

    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),

    #[error("Invalid storage connection string: {0}")]
    InvalidConnectionString(String),

    #[error("Storage account key is not valid base64")]
    InvalidAccountKey,

    #[error("Response missing expected field: {0}")]
    MissingField(&'static str),
}

impl AzureError {
    /// HTTP status reported by the service, if the error came from one.
    pub fn status(&self) -> Option<u16> {
        match self {
            AzureError::ApiError { status, .. } => Some(*status),
            AzureError::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

/// Strip the query string so SAS signatures and keys never reach the logs.
pub fn redact_url(url: &str) -> &str {
    url.split_once('?').map_or(url, |(base, _)| base)
}
