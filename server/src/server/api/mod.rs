//! REST API handlers grouped by pipeline step.

pub mod blob;
pub mod color;
pub mod copy;
pub mod images;
pub mod post;
pub mod status;

use axum::Json;
use axum::http::StatusCode;
use serde_json::{Value, json};

use crate::services::ServiceError;

type ApiResult = Result<Json<Value>, (StatusCode, Json<Value>)>;

/// Standard error response.
pub fn err_json(status: u16, message: &str) -> (StatusCode, Json<Value>) {
    (
        StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
        Json(json!({ "status": "error", "error": message })),
    )
}

/// Log a service failure and turn it into an error response.
fn service_err(route: &'static str, e: ServiceError) -> (StatusCode, Json<Value>) {
    let status = e.status_code();
    if status >= 500 {
        tracing::error!(route, status, "Request failed: {e}");
    } else {
        tracing::warn!(route, status, "Request rejected: {e}");
    }
    err_json(status, &e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn err_json_shape() {
        let (status, Json(body)) = err_json(400, "Copy is required");
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["status"], "error");
        assert_eq!(body["error"], "Copy is required");
    }

    #[test]
    fn unknown_status_becomes_500() {
        let (status, _) = err_json(1000, "x");
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn service_errors_keep_their_status() {
        let (status, Json(body)) = service_err("test", ServiceError::precondition("no"));
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "no");
        let (status, _) = service_err("test", ServiceError::ShuttingDown);
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    }
}
