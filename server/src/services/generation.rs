//! Text and image generation through the chat and image deployments.

use azure_client::{ChatMessage, ChatRequest, ImageRequest};
use tracing::info;

use super::ServiceError;
use super::prompts::{
    BACKGROUND_SYSTEM, BACKGROUND_TEMPERATURE, COPY_TEMPERATURE, PostType,
    background_image_prompt, background_user, copy_system,
};
use crate::app::SharedState;

/// Inputs for a background description. Colors or an image must be given.
#[derive(Debug, Clone, Default)]
pub struct BackgroundBrief<'a> {
    pub colors: Option<&'a str>,
    pub copy: Option<&'a str>,
    pub image_url: Option<&'a str>,
}

impl BackgroundBrief<'_> {
    fn check(&self) -> Result<(), ServiceError> {
        let has = |v: Option<&str>| v.is_some_and(|s| !s.trim().is_empty());
        if !has(self.colors) && !has(self.image_url) {
            return Err(ServiceError::precondition("Colors or ImageUrl is required"));
        }
        Ok(())
    }
}

/// Short description of a simple background in contrasting colors.
pub async fn describe_background(
    state: &SharedState,
    brief: &BackgroundBrief<'_>,
) -> Result<String, ServiceError> {
    brief.check()?;
    let text = background_user(brief.colors, brief.copy);
    let user = match brief.image_url.filter(|u| !u.trim().is_empty()) {
        Some(url) => ChatMessage::user_with_image(text, url),
        None => ChatMessage::user(text),
    };
    let request = ChatRequest::new(BACKGROUND_SYSTEM, user).temperature(BACKGROUND_TEMPERATURE);
    let description = state
        .openai()
        .chat_completion(&state.config().chat_deployment, &request)
        .await?;
    info!(chars = description.len(), "Background described");
    Ok(description)
}

/// Generate background images for `description`; returns their URLs.
pub async fn generate_backgrounds(
    state: &SharedState,
    description: &str,
) -> Result<Vec<String>, ServiceError> {
    if description.trim().is_empty() {
        return Err(ServiceError::precondition("Description is required"));
    }
    let config = state.config();
    let request = ImageRequest {
        prompt: background_image_prompt(description),
        n: config.image_count,
        size: config.image_size.clone(),
    };
    Ok(state
        .openai()
        .generate_images(&config.image_deployment, &request)
        .await?)
}

/// Social media post text for the given marketing copy.
pub async fn create_copy(
    state: &SharedState,
    copy: &str,
    post_type: PostType,
) -> Result<String, ServiceError> {
    if copy.trim().is_empty() {
        return Err(ServiceError::precondition("Copy is required"));
    }
    let request = ChatRequest::new(copy_system(post_type), ChatMessage::user(copy))
        .temperature(COPY_TEMPERATURE);
    let text = state
        .openai()
        .chat_completion(&state.config().chat_deployment, &request)
        .await?;
    info!(?post_type, chars = text.len(), "Copy created");
    Ok(text)
}
