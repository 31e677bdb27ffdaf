//! Setting value validation.

use regex::Regex;
use std::sync::LazyLock;

static RE_IMAGE_SIZE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d+x\d+$").unwrap());
static RE_CONTAINER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9][a-z0-9-]{1,61}[a-z0-9]$").unwrap());
static RE_ENDPOINT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^https?://[^\s/?#]+").unwrap());
static RE_ROUTE_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(/[A-Za-z0-9._~-]+)+$").unwrap());

/// Validate a setting value. Returns `Ok(())` if valid, or an error message.
pub fn validate_setting(key: &str, value: &str) -> Result<(), String> {
    match key {
        "SERVER_PORT" => validate_int_range(value, 1, 65535)?,
        "SAS_EXPIRY_HOURS" => validate_int_range(value, 1, 72)?,
        "IMAGE_GENERATION_COUNT" => validate_int_range(value, 1, 10)?,
        "IMAGE_GENERATION_SIZE" => {
            if !RE_IMAGE_SIZE.is_match(value) {
                return Err("must look like 1024x1024".into());
            }
        }
        "AZURE_BLOB_UPLOAD_CONTAINER" => {
            if !RE_CONTAINER.is_match(value) || value.contains("--") {
                return Err(
                    "must be 3-63 lowercase letters, digits or single hyphens".into(),
                );
            }
        }
        "AZURE_OPENAI_ENDPOINT" | "VISION_SERVICE_ENDPOINT" => {
            if !RE_ENDPOINT.is_match(value) {
                return Err("must be an http(s) URL".into());
            }
        }
        "ROUTE_PREFIX" => {
            if !value.is_empty() && !RE_ROUTE_PREFIX.is_match(value) {
                return Err("must be empty or like /api (leading slash, no trailing slash)".into());
            }
        }
        "COLOR_THEME_SOURCE" => {
            if value != "palette" && value != "vision" {
                return Err("must be 'palette' or 'vision'".into());
            }
        }
        _ => {}
    }
    Ok(())
}

fn validate_int_range(value: &str, min: i64, max: i64) -> Result<(), String> {
    let v: i64 = value.parse().map_err(|_| "must be an integer")?;
    if v < min || v > max {
        return Err(format!("must be between {min} and {max}"));
    }
    Ok(())
}
