//! Runtime application configuration.

use std::path::PathBuf;

use super::manager::SettingsManager;

/// Where `/getcolortheme` gets its color names from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorThemeSource {
    /// Local nearest-swatch hue counting.
    #[default]
    Palette,
    /// Hosted color analysis plus a chat-named accent color.
    Vision,
}

impl ColorThemeSource {
    pub fn as_str(self) -> &'static str {
        match self {
            ColorThemeSource::Palette => "palette",
            ColorThemeSource::Vision => "vision",
        }
    }
}

impl std::str::FromStr for ColorThemeSource {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "palette" => Ok(ColorThemeSource::Palette),
            "vision" => Ok(ColorThemeSource::Vision),
            other => Err(format!("unknown color theme source: {other}")),
        }
    }
}

/// Runtime configuration, validated once at startup.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub openai_endpoint: String,
    pub openai_key: String,
    pub chat_deployment: String,
    pub image_deployment: String,
    pub openai_api_version: String,
    pub vision_endpoint: String,
    pub vision_key: String,
    pub storage_connection_string: String,
    pub upload_container: String,
    pub server_port: u16,
    pub route_prefix: String,
    pub static_dir: Option<PathBuf>,
    pub sas_expiry_hours: i64,
    pub color_theme_source: ColorThemeSource,
    pub image_count: u32,
    pub image_size: String,
}

impl AppConfig {
    /// Load configuration, failing with every missing or invalid key at once.
    pub fn load(sm: &SettingsManager) -> Result<Self, anyhow::Error> {
        let missing = sm.missing_required();
        if !missing.is_empty() {
            anyhow::bail!("Missing required settings: {}", missing.join(", "));
        }
        let invalid = sm.invalid_settings();
        if !invalid.is_empty() {
            anyhow::bail!("Invalid settings: {}", invalid.join("; "));
        }

        let g = |key: &str| -> String { sm.get_setting(key).unwrap_or_default() };
        let static_dir = g("STATIC_DIR");

        Ok(Self {
            openai_endpoint: g("AZURE_OPENAI_ENDPOINT"),
            openai_key: g("AZURE_OPENAI_KEY"),
            chat_deployment: g("AZURE_OPENAI_CHAT_DEPLOYMENT"),
            image_deployment: g("AZURE_OPENAI_IMAGE_DEPLOYMENT"),
            openai_api_version: g("AZURE_OPENAI_API_VERSION"),
            vision_endpoint: g("VISION_SERVICE_ENDPOINT"),
            vision_key: g("VISION_SERVICE_KEY"),
            storage_connection_string: g("BLOB_STORAGE_CONNECTION_STRING"),
            upload_container: g("AZURE_BLOB_UPLOAD_CONTAINER"),
            server_port: parse_or(&g("SERVER_PORT"), 8080),
            route_prefix: g("ROUTE_PREFIX"),
            static_dir: (!static_dir.is_empty()).then(|| PathBuf::from(static_dir)),
            sas_expiry_hours: parse_or(&g("SAS_EXPIRY_HOURS"), 24),
            color_theme_source: g("COLOR_THEME_SOURCE").parse().unwrap_or_default(),
            image_count: parse_or(&g("IMAGE_GENERATION_COUNT"), 4),
            image_size: g("IMAGE_GENERATION_SIZE"),
        })
    }
}

fn parse_or<T: std::str::FromStr>(s: &str, default: T) -> T {
    s.parse().unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn required_pairs() -> Vec<(&'static str, &'static str)> {
        vec![
            ("AZURE_OPENAI_ENDPOINT", "https://test.openai.azure.com"),
            ("AZURE_OPENAI_KEY", "openai-key"),
            ("AZURE_OPENAI_CHAT_DEPLOYMENT", "gpt-4o"),
            ("VISION_SERVICE_ENDPOINT", "https://test.cognitiveservices.azure.com"),
            ("VISION_SERVICE_KEY", "vision-key"),
            (
                "BLOB_STORAGE_CONNECTION_STRING",
                "AccountName=devacct;AccountKey=dGVzdC1hY2NvdW50LWtleS0wMTIzNDU2Nzg5YWJjZGVm",
            ),
            ("AZURE_BLOB_UPLOAD_CONTAINER", "uploads"),
        ]
    }

    #[test]
    fn load_applies_defaults() {
        let config = AppConfig::load(&SettingsManager::from_pairs(required_pairs())).unwrap();
        assert_eq!(config.server_port, 8080);
        assert_eq!(config.sas_expiry_hours, 24);
        assert_eq!(config.image_count, 4);
        assert_eq!(config.image_size, "1024x1024");
        assert_eq!(config.image_deployment, "dall-e-3");
        assert_eq!(config.color_theme_source, ColorThemeSource::Palette);
        assert!(config.static_dir.is_none());
        assert_eq!(config.route_prefix, "");
    }

    #[test]
    fn load_lists_every_missing_key() {
        let err = AppConfig::load(&SettingsManager::from_pairs([("VISION_SERVICE_KEY", "k")]))
            .unwrap_err()
            .to_string();
        assert!(err.contains("AZURE_OPENAI_ENDPOINT"));
        assert!(err.contains("AZURE_BLOB_UPLOAD_CONTAINER"));
        assert!(!err.contains("VISION_SERVICE_KEY"));
    }

    #[test]
    fn load_rejects_invalid_values() {
        let mut pairs = required_pairs();
        pairs.push(("SAS_EXPIRY_HOURS", "500"));
        let err = AppConfig::load(&SettingsManager::from_pairs(pairs)).unwrap_err();
        assert!(err.to_string().contains("SAS_EXPIRY_HOURS"));
    }

    #[test]
    fn load_reads_overrides() {
        let mut pairs = required_pairs();
        pairs.extend([
            ("COLOR_THEME_SOURCE", "vision"),
            ("ROUTE_PREFIX", "/api"),
            ("STATIC_DIR", "./dist"),
            ("SERVER_PORT", "7071"),
        ]);
        let config = AppConfig::load(&SettingsManager::from_pairs(pairs)).unwrap();
        assert_eq!(config.color_theme_source, ColorThemeSource::Vision);
        assert_eq!(config.route_prefix, "/api");
        assert_eq!(config.static_dir, Some(PathBuf::from("./dist")));
        assert_eq!(config.server_port, 7071);
    }
}
