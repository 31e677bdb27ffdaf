//! POST /generatepost

use axum::Json;
use axum::extract::State;
use serde::Deserialize;
use serde_json::json;

use super::{ApiResult, service_err};
use crate::app::SharedState;
use crate::services::pipeline::{PostRequest, generate_post};
use crate::services::prompts::PostType;

#[derive(Debug, Deserialize)]
pub struct GeneratePostBody {
    #[serde(rename = "Copy", alias = "copy", default)]
    pub copy: String,
    #[serde(rename = "PostType", alias = "postType", default)]
    pub post_type: String,
    #[serde(rename = "ForegroundImageUri", alias = "foregroundImageUri", default)]
    pub foreground_image_uri: String,
}

pub async fn generate(
    State(state): State<SharedState>,
    Json(body): Json<GeneratePostBody>,
) -> ApiResult {
    let request = PostRequest {
        copy: body.copy,
        post_type: PostType::from_name(&body.post_type),
        foreground_image_uri: body.foreground_image_uri,
    };
    let post = generate_post(&state, &request)
        .await
        .map_err(|e| service_err("generatepost", e))?;
    Ok(Json(json!(post)))
}
