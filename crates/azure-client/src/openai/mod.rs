//! Azure OpenAI REST client.
//!
//! Chat completions and image generations against named deployments,
//! with `api-key` header injection.

mod chat;
mod images;

pub mod models;

pub use models::{
    ChatChoice, ChatCompletionResponse, ChatMessage, ChatRequest, ContentPart, GeneratedImage,
    ImageGenerationResponse, ImageRequest, ImageUrl, MessageContent, ResponseMessage, Role,
};

use crate::request::join_endpoint;

const API_KEY_HEADER: &str = "api-key";

/// Azure OpenAI client bound to one resource endpoint.
#[derive(Clone)]
pub struct OpenAiClient {
    pub(super) http: reqwest::Client,
    pub(super) endpoint: String,
    pub(super) key: String,
    pub(super) api_version: String,
}

impl OpenAiClient {
    pub fn new(endpoint: String, key: String, api_version: String) -> Self {
        Self::with_http(reqwest::Client::new(), endpoint, key, api_version)
    }

    pub fn with_http(
        http: reqwest::Client,
        endpoint: String,
        key: String,
        api_version: String,
    ) -> Self {
        Self {
            http,
            endpoint,
            key,
            api_version,
        }
    }

    /// URL of an operation on a deployment, e.g. `chat/completions`.
    fn deployment_url(&self, deployment: &str, operation: &str) -> String {
        let path = format!(
            "openai/deployments/{deployment}/{operation}?api-version={}",
            self.api_version
        );
        join_endpoint(&self.endpoint, &path)
    }

    /// POST a JSON body to a deployment operation and return the response text.
    async fn post_json(
        &self,
        deployment: &str,
        operation: &str,
        body: &impl serde::Serialize,
    ) -> Result<String, crate::AzureError> {
        let url = self.deployment_url(deployment, operation);
        let resp = self
            .http
            .post(&url)
            .header(API_KEY_HEADER, &self.key)
            .json(body)
            .send()
            .await?;
        crate::request::read_text(resp).await
    }
}
