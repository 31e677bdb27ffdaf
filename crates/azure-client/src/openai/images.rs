use super::*;
use crate::AzureError;

impl OpenAiClient {
    /// Generate images and return their URLs.
    pub async fn generate_images(
        &self,
        deployment: &str,
        request: &ImageRequest,
    ) -> Result<Vec<String>, AzureError> {
        let body = self
            .post_json(deployment, "images/generations", request)
            .await?;
        let parsed: ImageGenerationResponse = serde_json::from_str(&body)?;
        let urls = image_urls(parsed)?;
        tracing::info!(deployment, count = urls.len(), "Images generated");
        Ok(urls)
    }
}

fn image_urls(resp: ImageGenerationResponse) -> Result<Vec<String>, AzureError> {
    let urls: Vec<String> = resp.data.into_iter().filter_map(|img| img.url).collect();
    if urls.is_empty() {
        return Err(AzureError::MissingField("data[].url"));
    }
    Ok(urls)
}
