//! Image routes:
//!   POST /generatebackgrounds
//!   POST /removebackgroundandcrop
//!   POST /combineimages

use axum::Json;
use axum::extract::State;
use serde::Deserialize;
use serde_json::json;

use super::color::ImageUri;
use super::{ApiResult, service_err};
use crate::app::SharedState;
use crate::services::generation::generate_backgrounds;
use crate::services::image_prep::{combine_images, remove_background_and_crop};

#[derive(Debug, Deserialize)]
pub struct BackgroundDescription {
    #[serde(rename = "Description", alias = "description", default)]
    pub description: String,
}

#[derive(Debug, Deserialize)]
pub struct SocialImage {
    #[serde(rename = "ForegroundImage", alias = "foregroundImage", default)]
    pub foreground_image: String,
    #[serde(rename = "BackgroundImages", alias = "backgroundImages", default)]
    pub background_images: Vec<String>,
}

/// POST /generatebackgrounds
pub async fn generate_background_images(
    State(state): State<SharedState>,
    Json(body): Json<BackgroundDescription>,
) -> ApiResult {
    let urls = generate_backgrounds(&state, &body.description)
        .await
        .map_err(|e| service_err("generatebackgrounds", e))?;
    Ok(Json(json!({ "backgroundUrls": urls })))
}

/// POST /removebackgroundandcrop
pub async fn remove_background(
    State(state): State<SharedState>,
    Json(body): Json<ImageUri>,
) -> ApiResult {
    let url = remove_background_and_crop(&state, &body.foreground_image_uri)
        .await
        .map_err(|e| service_err("removebackgroundandcrop", e))?;
    Ok(Json(json!({ "backgroundRemovedUrl": url.as_str() })))
}

/// POST /combineimages
pub async fn combine(
    State(state): State<SharedState>,
    Json(body): Json<SocialImage>,
) -> ApiResult {
    let urls = combine_images(&state, &body.foreground_image, &body.background_images)
        .await
        .map_err(|e| service_err("combineimages", e))?;
    let urls: Vec<&str> = urls.iter().map(|u| u.as_str()).collect();
    Ok(Json(json!({ "combinedImageUrls": urls })))
}
