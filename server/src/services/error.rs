//! Error type shared by the pipeline services.

use azure_client::AzureError;
use image_processor::ImageError;

#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    /// The request is missing something the operation needs.
    #[error("{0}")]
    Precondition(String),

    #[error("Upstream service failed: {0}")]
    Upstream(#[from] AzureError),

    #[error("Failed to fetch image from {url}: {reason}")]
    Fetch { url: String, reason: String },

    #[error("Image processing failed: {0}")]
    Image(#[from] ImageError),

    #[error("Background task failed: {0}")]
    Task(#[from] tokio::task::JoinError),

    #[error("Server is shutting down")]
    ShuttingDown,
}

impl ServiceError {
    pub fn precondition(message: impl Into<String>) -> Self {
        ServiceError::Precondition(message.into())
    }

    /// HTTP status the API layer answers with.
    pub fn status_code(&self) -> u16 {
        match self {
            ServiceError::Precondition(_) => 400,
            ServiceError::Upstream(_) | ServiceError::Fetch { .. } => 502,
            ServiceError::Image(_) => 422,
            ServiceError::Task(_) => 500,
            ServiceError::ShuttingDown => 503,
        }
    }
}
