//! Static file serving for the built browser client, with JSON 404s elsewhere.

use std::path::Path;

use axum::extract::OriginalUri;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use tower_http::services::{ServeDir, ServeFile};

/// Serve files from `dir`; unknown paths get `index.html` (SPA support).
pub fn static_files(dir: &Path) -> ServeDir<ServeFile> {
    ServeDir::new(dir).fallback(ServeFile::new(dir.join("index.html")))
}

/// Fallback for unmatched paths when no client is served.
/// Uses `OriginalUri` so nested routers report the full request path.
pub async fn not_found(OriginalUri(uri): OriginalUri) -> Response {
    (
        StatusCode::NOT_FOUND,
        axum::Json(json!({
            "error": "Not Found",
            "path": uri.path(),
        })),
    )
        .into_response()
}
