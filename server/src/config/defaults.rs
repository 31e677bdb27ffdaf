//! All setting definitions with their default values.

use std::collections::HashMap;
use std::sync::LazyLock;

/// (key, default, secret, required, description)
type DefTuple = (&'static str, &'static str, bool, bool, &'static str);

const DEFS: &[DefTuple] = &[
    ("AZURE_OPENAI_ENDPOINT", "", false, true, "Azure OpenAI resource endpoint"),
    ("AZURE_OPENAI_KEY", "", true, true, "Azure OpenAI API key"),
    ("AZURE_OPENAI_CHAT_DEPLOYMENT", "", false, true, "Chat completion deployment name"),
    ("AZURE_OPENAI_IMAGE_DEPLOYMENT", "dall-e-3", false, false, "Image generation deployment name"),
    ("AZURE_OPENAI_API_VERSION", "2024-02-01", false, false, "Azure OpenAI REST API version"),
    ("VISION_SERVICE_ENDPOINT", "", false, true, "Azure AI Vision endpoint"),
    ("VISION_SERVICE_KEY", "", true, true, "Azure AI Vision key"),
    ("BLOB_STORAGE_CONNECTION_STRING", "", true, true, "Storage account connection string"),
    ("AZURE_BLOB_UPLOAD_CONTAINER", "", false, true, "Container for uploads and generated images"),
    ("SERVER_PORT", "8080", false, false, "HTTP listen port"),
    ("ROUTE_PREFIX", "", false, false, "Path prefix applied to every API route"),
    ("STATIC_DIR", "", false, false, "Directory of the built browser client"),
    ("SAS_EXPIRY_HOURS", "24", false, false, "Lifetime of issued SAS URLs in hours"),
    ("COLOR_THEME_SOURCE", "palette", false, false, "palette (local hue counting) or vision (hosted color analysis)"),
    ("IMAGE_GENERATION_COUNT", "4", false, false, "Backgrounds generated per request"),
    ("IMAGE_GENERATION_SIZE", "1024x1024", false, false, "Size of generated backgrounds"),
];

/// A single setting definition.
#[derive(Debug, Clone)]
pub struct SettingDef {
    pub key: &'static str,
    pub default: &'static str,
    pub secret: bool,
    pub required: bool,
    pub description: &'static str,
}

/// Global setting definitions indexed by key.
pub static DEFAULT_SETTINGS: LazyLock<HashMap<&'static str, SettingDef>> = LazyLock::new(|| {
    DEFS.iter()
        .map(|&(key, default, secret, required, description)| {
            (
                key,
                SettingDef {
                    key,
                    default,
                    secret,
                    required,
                    description,
                },
            )
        })
        .collect()
});

/// Setting keys in declaration order.
pub fn setting_keys() -> impl Iterator<Item = &'static str> {
    DEFS.iter().map(|d| d.0)
}

/// Get the default value for a setting key, or `None` if not defined.
pub fn get_default(key: &str) -> Option<&'static str> {
    DEFAULT_SETTINGS.get(key).map(|d| d.default)
}
