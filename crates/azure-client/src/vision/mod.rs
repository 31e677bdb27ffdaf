//! Azure AI Vision image-analysis client.
//!
//! Smart cropping and background removal go through the 4.0
//! `imageanalysis` endpoints; color analysis uses the legacy v3.2 API.

mod models;

pub use models::{
    AnalyzeResponse, BoundingBox, ColorAnalysis, ImageMetadata, LegacyAnalyzeResponse, SmartCrop,
    SmartCropsResult,
};

use reqwest::header::CONTENT_TYPE;
use serde_json::json;

use crate::AzureError;
use crate::request::{join_endpoint, read_bytes, read_json};

const SUBSCRIPTION_KEY_HEADER: &str = "Ocp-Apim-Subscription-Key";
const ANALYZE_PATH: &str = "computervision/imageanalysis:analyze?api-version=2023-10-01&features=smartCrops&smartcrops-aspect-ratios=1.0";
const SEGMENT_PATH: &str =
    "computervision/imageanalysis:segment?api-version=2023-02-01-preview&mode=backgroundRemoval";
const COLOR_PATH: &str = "vision/v3.2/analyze?visualFeatures=Color";

/// Vision client with key-header injection.
#[derive(Clone)]
pub struct VisionClient {
    http: reqwest::Client,
    endpoint: String,
    key: String,
}

impl VisionClient {
    pub fn new(endpoint: String, key: String) -> Self {
        Self::with_http(reqwest::Client::new(), endpoint, key)
    }

    pub fn with_http(http: reqwest::Client, endpoint: String, key: String) -> Self {
        Self {
            http,
            endpoint,
            key,
        }
    }

    /// Ask for a square (aspect ratio 1.0) crop suggestion for `image`.
    pub async fn smart_crop(&self, image: Vec<u8>) -> Result<BoundingBox, AzureError> {
        let url = join_endpoint(&self.endpoint, ANALYZE_PATH);
        let resp = self
            .http
            .post(&url)
            .header(SUBSCRIPTION_KEY_HEADER, &self.key)
            .header(CONTENT_TYPE, "application/octet-stream")
            .body(image)
            .send()
            .await?;

        let parsed: AnalyzeResponse = read_json(resp).await?;
        let bounding_box = first_crop(parsed)?;
        tracing::debug!(?bounding_box, "Smart crop suggested");
        Ok(bounding_box)
    }

    /// Remove the background of `image`, returning a PNG with alpha.
    pub async fn remove_background(&self, image: Vec<u8>) -> Result<Vec<u8>, AzureError> {
        let url = join_endpoint(&self.endpoint, SEGMENT_PATH);
        let resp = self
            .http
            .post(&url)
            .header(SUBSCRIPTION_KEY_HEADER, &self.key)
            .header(CONTENT_TYPE, "application/octet-stream")
            .body(image)
            .send()
            .await?;

        let png = read_bytes(resp).await?;
        tracing::debug!(bytes = png.len(), "Background removed");
        Ok(png)
    }

    /// Dominant and accent colors of the image at `image_url`.
    pub async fn analyze_color(&self, image_url: &str) -> Result<ColorAnalysis, AzureError> {
        let url = join_endpoint(&self.endpoint, COLOR_PATH);
        let resp = self
            .http
            .post(&url)
            .header(SUBSCRIPTION_KEY_HEADER, &self.key)
            .json(&json!({ "url": image_url }))
            .send()
            .await?;

        let parsed: LegacyAnalyzeResponse = read_json(resp).await?;
        parsed.color.ok_or(AzureError::MissingField("color"))
    }
}

fn first_crop(resp: AnalyzeResponse) -> Result<BoundingBox, AzureError> {
    resp.smart_crops_result
        .and_then(|r| r.values.into_iter().next())
        .map(|crop| crop.bounding_box)
        .ok_or(AzureError::MissingField("smartCropsResult.values"))
}
