//! HTTP server binary for the social media content pipeline.
//!
//! Loads configuration, starts the axum server, and shuts down on Ctrl+C.

use tracing_subscriber::EnvFilter;

use social_media_generation_lib::app::SharedState;
use social_media_generation_lib::server;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    tracing::info!("Starting social media generation server");

    let config = social_media_generation_lib::init_config()?;
    let state = SharedState::new(config)?;

    let server_state = state.clone();
    let mut server_handle = tokio::spawn(async move { server::start_server(server_state).await });

    tracing::info!(
        port = state.server_port(),
        "Server running. Press Ctrl+C to stop."
    );

    tokio::select! {
        result = &mut server_handle => {
            return result?;
        }
        signal = tokio::signal::ctrl_c() => {
            signal?;
        }
    }

    tracing::info!("Shutting down...");
    state.shutdown_token().cancel();
    server_handle.await??;
    Ok(())
}
