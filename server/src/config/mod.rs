//! Configuration management: setting definitions, validation, loading from the environment.

pub mod app_config;
pub mod defaults;
pub mod manager;
pub mod validation;

pub use app_config::{AppConfig, ColorThemeSource};
pub use manager::SettingsManager;

use serde::{Deserialize, Serialize};

/// Setting type: normal or secret (masked when reported).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SettingType {
    Normal,
    Secret,
}

/// A setting as reported at startup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SettingInfo {
    pub key: String,
    pub value: String,
    #[serde(rename = "type")]
    pub setting_type: SettingType,
    pub required: bool,
    pub description: String,
    pub has_value: bool,
}

/// Which collaborators have credentials.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeatureStatus {
    pub openai_configured: bool,
    pub vision_configured: bool,
    pub storage_configured: bool,
    pub missing_settings: Vec<String>,
    pub warnings: Vec<String>,
}
