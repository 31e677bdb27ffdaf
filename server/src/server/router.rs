use axum::{
    Router,
    routing::{get, post},
};
use tower_http::cors::CorsLayer;

use super::{api, assets};
use crate::app::SharedState;

/// Create the axum router with all routes.
pub fn create_router(state: SharedState) -> Router {
    let routes = api_routes();

    let prefix = state.config().route_prefix.clone();
    let router = if prefix.is_empty() {
        routes
    } else {
        Router::new().nest(&prefix, routes.fallback(assets::not_found))
    };

    let router = match state.config().static_dir.as_deref() {
        Some(dir) => {
            tracing::info!("Serving static files from {}", dir.display());
            router.fallback_service(assets::static_files(dir))
        }
        None => router.fallback(assets::not_found),
    };

    router.layer(CorsLayer::permissive()).with_state(state)
}

fn api_routes() -> Router<SharedState> {
    Router::new()
        // --- Core ---
        .route("/status", get(api::status::status_handler))
        // --- Colors & copy ---
        .route("/getcolortheme", post(api::color::get_color_theme))
        .route(
            "/getbackgrounddescription",
            post(api::copy::get_background_description),
        )
        .route("/createcopy", post(api::copy::create_social_copy))
        // --- Images ---
        .route(
            "/generatebackgrounds",
            post(api::images::generate_background_images),
        )
        .route(
            "/removebackgroundandcrop",
            post(api::images::remove_background),
        )
        .route("/combineimages", post(api::images::combine))
        // --- Uploads ---
        .route("/prepareblob", get(api::blob::prepare_blob))
        // --- Whole post ---
        .route("/generatepost", post(api::post::generate))
}
