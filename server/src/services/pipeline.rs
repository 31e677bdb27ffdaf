//! Whole-post generation: the browser's step-by-step flow run server-side.

use serde::Serialize;
use tracing::info;

use super::ServiceError;
use super::generation::{BackgroundBrief, create_copy, describe_background, generate_backgrounds};
use super::image_prep::{combine_images, remove_background_and_crop};
use super::prompts::PostType;
use crate::app::SharedState;

#[derive(Debug, Clone)]
pub struct PostRequest {
    pub copy: String,
    pub post_type: PostType,
    pub foreground_image_uri: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedPost {
    pub post: String,
    pub image_urls: Vec<String>,
    pub foreground_url: String,
    pub background_description: String,
    pub background_urls: Vec<String>,
}

/// Remove background → describe background → generate backgrounds, then
/// combine images and write the copy concurrently.
pub async fn generate_post(
    state: &SharedState,
    request: &PostRequest,
) -> Result<GeneratedPost, ServiceError> {
    if request.copy.trim().is_empty() {
        return Err(ServiceError::precondition("Copy is required"));
    }
    if request.foreground_image_uri.trim().is_empty() {
        return Err(ServiceError::precondition("ForegroundImageUri is required"));
    }

    let foreground = remove_background_and_crop(state, &request.foreground_image_uri).await?;
    let foreground_url = foreground.to_string();

    let brief = BackgroundBrief {
        colors: None,
        copy: Some(&request.copy),
        image_url: Some(&foreground_url),
    };
    let background_description = describe_background(state, &brief).await?;
    let background_urls = generate_backgrounds(state, &background_description).await?;

    let (combined, post) = tokio::try_join!(
        combine_images(state, &foreground_url, &background_urls),
        create_copy(state, &request.copy, request.post_type),
    )?;

    info!(images = combined.len(), "Post generated");
    Ok(GeneratedPost {
        post,
        image_urls: combined.into_iter().map(String::from).collect(),
        foreground_url,
        background_description,
        background_urls,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_post_serializes_camel_case() {
        let post = GeneratedPost {
            post: "New drop #summer".into(),
            image_urls: vec!["https://a/1.png".into()],
            foreground_url: "https://a/fg.png".into(),
            background_description: "soft teal".into(),
            background_urls: vec![],
        };
        let value = serde_json::to_value(&post).unwrap();
        assert_eq!(value["imageUrls"][0], "https://a/1.png");
        assert_eq!(value["foregroundUrl"], "https://a/fg.png");
        assert_eq!(value["backgroundDescription"], "soft teal");
        assert!(value["backgroundUrls"].as_array().unwrap().is_empty());
    }
}
