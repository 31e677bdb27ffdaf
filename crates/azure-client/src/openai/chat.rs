use super::*;
use crate::AzureError;

impl OpenAiClient {
    /// Run a chat completion and return the first choice's content.
    pub async fn chat_completion(
        &self,
        deployment: &str,
        request: &ChatRequest,
    ) -> Result<String, AzureError> {
        let body = self
            .post_json(deployment, "chat/completions", request)
            .await?;
        let parsed: ChatCompletionResponse = serde_json::from_str(&body)?;
        let content = first_content(parsed)?;
        tracing::debug!(deployment, chars = content.len(), "Chat completion received");
        Ok(content)
    }
}

fn first_content(resp: ChatCompletionResponse) -> Result<String, AzureError> {
    resp.choices
        .into_iter()
        .next()
        .and_then(|c| c.message.content)
        .ok_or(AzureError::MissingField("choices[0].message.content"))
}
