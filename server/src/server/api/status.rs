//! GET /status

use axum::Json;
use axum::extract::State;
use serde_json::{Value, json};

use crate::app::SharedState;

pub async fn status_handler(State(state): State<SharedState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "colorThemeSource": state.config().color_theme_source.as_str(),
    }))
}
