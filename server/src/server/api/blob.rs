//! GET /prepareblob?filename=

use axum::Json;
use axum::extract::{Query, State};
use serde::Deserialize;
use serde_json::json;

use super::{ApiResult, err_json};
use crate::app::SharedState;

#[derive(Debug, Deserialize)]
pub struct PrepareBlobQuery {
    #[serde(default)]
    pub filename: Option<String>,
}

pub async fn prepare_blob(
    State(state): State<SharedState>,
    Query(query): Query<PrepareBlobQuery>,
) -> ApiResult {
    let filename = query
        .filename
        .filter(|f| !f.trim().is_empty())
        .ok_or_else(|| err_json(400, "filename is required"))?;

    let url = state.blob().prepare_upload(&filename).map_err(|e| {
        tracing::error!("Failed to sign upload URL: {e}");
        err_json(500, "Failed to sign upload URL")
    })?;
    tracing::info!(blob = azure_client::redact_url(url.as_str()), "Upload URL issued");
    Ok(Json(json!({ "sasUri": url.as_str() })))
}
