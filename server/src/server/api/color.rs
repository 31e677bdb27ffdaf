//! POST /getcolortheme

use axum::Json;
use axum::extract::State;
use serde::Deserialize;
use serde_json::json;

use super::{ApiResult, service_err};
use crate::app::SharedState;
use crate::services::color_theme::color_theme;

#[derive(Debug, Deserialize)]
pub struct ImageUri {
    #[serde(rename = "ForegroundImageUri", alias = "foregroundImageUri", default)]
    pub foreground_image_uri: String,
}

pub async fn get_color_theme(
    State(state): State<SharedState>,
    Json(body): Json<ImageUri>,
) -> ApiResult {
    let colors = color_theme(&state, &body.foreground_image_uri)
        .await
        .map_err(|e| service_err("getcolortheme", e))?;
    Ok(Json(json!({ "dominantColors": colors })))
}
