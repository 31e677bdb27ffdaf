//! Dominant color names for a product image.

use azure_client::{ChatMessage, ChatRequest};
use image_processor::{decode_rgba, dominant_hues};
use tokio::task::spawn_blocking;
use tracing::{debug, warn};

use super::ServiceError;
use super::fetch::fetch_image;
use super::prompts::{COLOR_NAME_SYSTEM, COLOR_NAME_TEMPERATURE, color_name_user};
use crate::app::SharedState;
use crate::config::ColorThemeSource;

/// Number of hue names reported by the palette source.
const THEME_HUES: usize = 3;

/// Placeholder used when the chat reply cannot be read as a color name.
pub const FALLBACK_COLOR_NAME: &str = "None";

/// Outcome of asking the chat model to name a hex color.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColorNameReply {
    Named(String),
    Fallback,
}

impl ColorNameReply {
    /// Read `{"ColorName": ".."}` from a reply, tolerating a fenced code block
    /// or prose around the JSON object.
    pub fn parse(reply: &str) -> Self {
        let json = match (reply.find('{'), reply.rfind('}')) {
            (Some(start), Some(end)) if start < end => &reply[start..=end],
            _ => return ColorNameReply::Fallback,
        };
        let Ok(value) = serde_json::from_str::<serde_json::Value>(json) else {
            return ColorNameReply::Fallback;
        };
        match value.get("ColorName").and_then(|v| v.as_str()).map(str::trim) {
            Some(name) if !name.is_empty() => ColorNameReply::Named(name.to_string()),
            _ => ColorNameReply::Fallback,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            ColorNameReply::Named(name) => name,
            ColorNameReply::Fallback => FALLBACK_COLOR_NAME,
        }
    }
}

/// Comma-separated color names describing the image at `image_url`.
pub async fn color_theme(state: &SharedState, image_url: &str) -> Result<String, ServiceError> {
    if image_url.trim().is_empty() {
        return Err(ServiceError::precondition("ForegroundImageUri is required"));
    }

    let names = match state.config().color_theme_source {
        ColorThemeSource::Palette => palette_theme(state, image_url).await?,
        ColorThemeSource::Vision => vision_theme(state, image_url).await?,
    };
    debug!(?names, "Color theme resolved");
    Ok(names.join(", "))
}

async fn palette_theme(state: &SharedState, image_url: &str) -> Result<Vec<String>, ServiceError> {
    let bytes = fetch_image(state.http(), image_url).await?;
    let hues = spawn_blocking(move || -> Result<_, image_processor::ImageError> {
        let img = decode_rgba(&bytes)?;
        Ok(dominant_hues(&img, THEME_HUES))
    })
    .await??;
    Ok(hues.into_iter().map(str::to_string).collect())
}

async fn vision_theme(state: &SharedState, image_url: &str) -> Result<Vec<String>, ServiceError> {
    let analysis = state.vision().analyze_color(image_url).await?;
    let mut names = analysis.dominant_colors;
    if let Some(accent) = analysis.accent_color.filter(|a| !a.is_empty()) {
        names.push(name_color(state, &accent).await?.as_str().to_string());
    }
    Ok(names)
}

/// Ask the chat model for an English name of a hex color.
pub async fn name_color(state: &SharedState, hex: &str) -> Result<ColorNameReply, ServiceError> {
    let request = ChatRequest::new(COLOR_NAME_SYSTEM, ChatMessage::user(color_name_user(hex)))
        .temperature(COLOR_NAME_TEMPERATURE);
    let reply = state
        .openai()
        .chat_completion(&state.config().chat_deployment, &request)
        .await?;

    let parsed = ColorNameReply::parse(&reply);
    if parsed == ColorNameReply::Fallback {
        warn!(hex, "Color name reply was not usable, using fallback");
    }
    Ok(parsed)
}
