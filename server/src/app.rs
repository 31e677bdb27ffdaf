use std::sync::Arc;

use azure_client::{BlobContainer, OpenAiClient, StorageAccount, VisionClient};
use tokio_util::sync::CancellationToken;

use crate::config::AppConfig;

/// Application shared state accessible from every axum handler.
#[derive(Clone)]
pub struct SharedState {
    inner: Arc<SharedStateInner>,
}

struct SharedStateInner {
    /// Application configuration
    config: AppConfig,
    /// Chat completions and image generation
    openai: OpenAiClient,
    /// Smart crop, background removal, color analysis
    vision: VisionClient,
    /// Upload container for prepared and generated images
    blob: BlobContainer,
    /// Client for fetching caller-supplied image URLs
    http: reqwest::Client,
    /// Cancelled on Ctrl+C
    shutdown_token: CancellationToken,
}

impl SharedState {
    /// Build the collaborator clients from a loaded config.
    pub fn new(config: AppConfig) -> Result<Self, anyhow::Error> {
        let http = reqwest::Client::new();
        let account = StorageAccount::from_connection_string(&config.storage_connection_string)?;
        let blob = BlobContainer::with_http(
            http.clone(),
            account,
            config.upload_container.clone(),
            chrono::Duration::hours(config.sas_expiry_hours),
        );
        let openai = OpenAiClient::with_http(
            http.clone(),
            config.openai_endpoint.clone(),
            config.openai_key.clone(),
            config.openai_api_version.clone(),
        );
        let vision = VisionClient::with_http(
            http.clone(),
            config.vision_endpoint.clone(),
            config.vision_key.clone(),
        );

        Ok(Self {
            inner: Arc::new(SharedStateInner {
                config,
                openai,
                vision,
                blob,
                http,
                shutdown_token: CancellationToken::new(),
            }),
        })
    }

    pub fn server_port(&self) -> u16 {
        self.inner.config.server_port
    }

    pub fn config(&self) -> &AppConfig {
        &self.inner.config
    }

    pub fn openai(&self) -> &OpenAiClient {
        &self.inner.openai
    }

    pub fn vision(&self) -> &VisionClient {
        &self.inner.vision
    }

    pub fn blob(&self) -> &BlobContainer {
        &self.inner.blob
    }

    pub fn http(&self) -> &reqwest::Client {
        &self.inner.http
    }

    pub fn shutdown_token(&self) -> &CancellationToken {
        &self.inner.shutdown_token
    }
}
