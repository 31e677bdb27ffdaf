//! Chat-backed text routes:
//!   POST /getbackgrounddescription
//!   POST /createcopy

use axum::Json;
use axum::extract::State;
use serde::Deserialize;
use serde_json::json;

use super::{ApiResult, service_err};
use crate::app::SharedState;
use crate::services::generation::{BackgroundBrief, create_copy, describe_background};
use crate::services::prompts::PostType;

#[derive(Debug, Deserialize)]
pub struct CopyAndColors {
    #[serde(rename = "Copy", alias = "copy", default)]
    pub copy: Option<String>,
    #[serde(rename = "Colors", alias = "colors", default)]
    pub colors: Option<String>,
    #[serde(rename = "ImageUrl", alias = "imageUrl", default)]
    pub image_url: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct MarketingInfo {
    #[serde(rename = "Copy", alias = "copy", default)]
    pub copy: String,
    #[serde(rename = "PostType", alias = "postType", default)]
    pub post_type: String,
}

/// POST /getbackgrounddescription
pub async fn get_background_description(
    State(state): State<SharedState>,
    Json(body): Json<CopyAndColors>,
) -> ApiResult {
    let brief = BackgroundBrief {
        colors: body.colors.as_deref(),
        copy: body.copy.as_deref(),
        image_url: body.image_url.as_deref(),
    };
    let description = describe_background(&state, &brief)
        .await
        .map_err(|e| service_err("getbackgrounddescription", e))?;
    Ok(Json(json!({ "description": description })))
}

/// POST /createcopy
pub async fn create_social_copy(
    State(state): State<SharedState>,
    Json(body): Json<MarketingInfo>,
) -> ApiResult {
    let post_type = PostType::from_name(&body.post_type);
    let copy = create_copy(&state, &body.copy, post_type)
        .await
        .map_err(|e| service_err("createcopy", e))?;
    Ok(Json(json!({ "copy": copy })))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn requests_accept_both_casings() {
        let pascal: MarketingInfo =
            serde_json::from_str(r#"{"Copy":"Sale","PostType":"twitter"}"#).unwrap();
        let camel: MarketingInfo =
            serde_json::from_str(r#"{"copy":"Sale","postType":"twitter"}"#).unwrap();
        assert_eq!(pascal.copy, camel.copy);
        assert_eq!(pascal.post_type, "twitter");

        let colors: CopyAndColors = serde_json::from_str(r#"{"Colors":"Red, Blue"}"#).unwrap();
        assert_eq!(colors.colors.as_deref(), Some("Red, Blue"));
        assert!(colors.copy.is_none());
        assert!(colors.image_url.is_none());
    }
}
