use serde::{Deserialize, Serialize};

/// Pixel rectangle returned by the smart-crop feature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub x: i64,
    pub y: i64,
    #[serde(rename = "w")]
    pub width: i64,
    #[serde(rename = "h")]
    pub height: i64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SmartCrop {
    #[serde(default)]
    pub aspect_ratio: f32,
    pub bounding_box: BoundingBox,
}

#[derive(Debug, Deserialize)]
pub struct SmartCropsResult {
    #[serde(default)]
    pub values: Vec<SmartCrop>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageMetadata {
    pub width: u32,
    pub height: u32,
    #[serde(default)]
    pub format: Option<String>,
}

/// Response of `imageanalysis:analyze` with the `smartCrops` feature.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeResponse {
    #[serde(default)]
    pub model_version: Option<String>,
    #[serde(default)]
    pub metadata: Option<ImageMetadata>,
    #[serde(default)]
    pub smart_crops_result: Option<SmartCropsResult>,
}

/// Legacy v3.2 color analysis.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorAnalysis {
    #[serde(default)]
    pub dominant_color_foreground: Option<String>,
    #[serde(default)]
    pub dominant_color_background: Option<String>,
    #[serde(default)]
    pub dominant_colors: Vec<String>,
    /// Hex color without a leading `#`.
    #[serde(default)]
    pub accent_color: Option<String>,
    #[serde(default, alias = "isBWImg")]
    pub is_bw_img: bool,
}

/// Response of `vision/v3.2/analyze?visualFeatures=Color`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegacyAnalyzeResponse {
    #[serde(default)]
    pub color: Option<ColorAnalysis>,
    #[serde(default)]
    pub request_id: Option<String>,
    #[serde(default)]
    pub metadata: Option<ImageMetadata>,
}
