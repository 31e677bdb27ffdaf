//! SettingsManager: environment-backed settings with defaults and feature status.

use std::collections::HashMap;

use super::defaults::{DEFAULT_SETTINGS, setting_keys};
use super::validation::validate_setting;
use super::{FeatureStatus, SettingInfo, SettingType};

/// Snapshot of the known settings taken from the process environment.
pub struct SettingsManager {
    values: HashMap<String, String>,
}

impl SettingsManager {
    /// Capture every known key from the environment.
    pub fn from_env() -> Self {
        Self::from_pairs(
            setting_keys().filter_map(|key| std::env::var(key).ok().map(|v| (key.to_string(), v))),
        )
    }

    /// Build from explicit key/value pairs. Empty values count as unset.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let values = pairs
            .into_iter()
            .map(|(k, v)| (k.into(), v.into().trim().to_string()))
            .filter(|(_, v)| !v.is_empty())
            .collect();
        Self { values }
    }

    /// Get a setting value. Falls back to the default if unset.
    pub fn get_setting(&self, key: &str) -> Result<String, anyhow::Error> {
        if let Some(val) = self.values.get(key) {
            return Ok(val.clone());
        }
        if let Some(def) = DEFAULT_SETTINGS.get(key) {
            return Ok(def.default.to_string());
        }
        anyhow::bail!("setting not found: {key}");
    }

    /// Required keys that have no value.
    pub fn missing_required(&self) -> Vec<String> {
        setting_keys()
            .filter(|key| DEFAULT_SETTINGS.get(key).is_some_and(|d| d.required))
            .filter(|key| !self.values.contains_key(*key))
            .map(str::to_string)
            .collect()
    }

    /// Validation failures of set values, formatted as `KEY: reason`.
    pub fn invalid_settings(&self) -> Vec<String> {
        setting_keys()
            .filter_map(|key| {
                let value = self.values.get(key)?;
                validate_setting(key, value).err().map(|e| format!("{key}: {e}"))
            })
            .collect()
    }

    /// All settings in declaration order, secrets masked.
    pub fn get_all_settings(&self) -> Vec<SettingInfo> {
        setting_keys()
            .filter_map(|key| DEFAULT_SETTINGS.get(key))
            .map(|def| {
                let set = self.values.get(def.key);
                let setting_type = if def.secret {
                    SettingType::Secret
                } else {
                    SettingType::Normal
                };
                let value = match (setting_type, set) {
                    (SettingType::Secret, Some(_)) => "********".to_string(),
                    (_, Some(v)) => v.clone(),
                    (_, None) => def.default.to_string(),
                };
                SettingInfo {
                    key: def.key.to_string(),
                    value,
                    setting_type,
                    required: def.required,
                    description: def.description.to_string(),
                    has_value: set.is_some(),
                }
            })
            .collect()
    }

    pub fn check_feature_status(&self) -> FeatureStatus {
        let has = |key: &str| self.values.contains_key(key);
        let mut warnings = self.invalid_settings();
        if !has("STATIC_DIR") {
            warnings.push("STATIC_DIR not set: browser client is not served".to_string());
        }
        FeatureStatus {
            openai_configured: has("AZURE_OPENAI_ENDPOINT")
                && has("AZURE_OPENAI_KEY")
                && has("AZURE_OPENAI_CHAT_DEPLOYMENT"),
            vision_configured: has("VISION_SERVICE_ENDPOINT") && has("VISION_SERVICE_KEY"),
            storage_configured: has("BLOB_STORAGE_CONNECTION_STRING")
                && has("AZURE_BLOB_UPLOAD_CONTAINER"),
            missing_settings: self.missing_required(),
            warnings,
        }
    }
}
