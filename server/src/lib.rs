pub mod app;
pub mod config;
pub mod server;
pub mod services;

use config::{AppConfig, SettingsManager};

/// Load .env from multiple candidate paths.
fn load_dotenv() {
    let candidates = [".env", "../.env", "../../.env"];
    for path in &candidates {
        if dotenvy::from_filename(path).is_ok() {
            tracing::info!("Loaded .env from: {path}");
            return;
        }
    }
    tracing::info!("No .env file found, using system environment variables");
}

/// Load .env, read settings from the environment and validate them.
pub fn init_config() -> Result<AppConfig, anyhow::Error> {
    load_dotenv();

    let sm = SettingsManager::from_env();

    let status = sm.check_feature_status();
    if !status.missing_settings.is_empty() || !status.warnings.is_empty() {
        tracing::warn!(
            "Missing settings: {:?}, warnings: {:?}",
            status.missing_settings,
            status.warnings
        );
    }
    for setting in sm.get_all_settings() {
        tracing::debug!(key = %setting.key, value = %setting.value, set = setting.has_value, "Setting");
    }

    let config = AppConfig::load(&sm)?;
    tracing::info!(
        "Settings loaded (port={}, color_theme_source={})",
        config.server_port,
        config.color_theme_source.as_str()
    );
    Ok(config)
}
