//! Background removal, cropping and compositing of product images.

use std::sync::Arc;

use image_processor::{
    CANVAS_SIZE, CropBox, ImageError, PlacedForeground, crop, decode_rgba, encode_png,
    resize_exact,
};
use tokio::task::spawn_blocking;
use tracing::{debug, info};
use url::Url;

use super::ServiceError;
use super::fetch::fetch_image;
use crate::app::SharedState;

/// Fetch → smart crop → 1024x1024 → background removal → upload.
///
/// Returns a read SAS URL of the uploaded PNG.
pub async fn remove_background_and_crop(
    state: &SharedState,
    image_url: &str,
) -> Result<Url, ServiceError> {
    if image_url.trim().is_empty() {
        return Err(ServiceError::precondition("ForegroundImageUri is required"));
    }
    let bytes = fetch_image(state.http(), image_url).await?;
    let (img, png) = spawn_blocking(move || -> Result<_, ImageError> {
        let img = decode_rgba(&bytes)?;
        let png = encode_png(&img)?;
        Ok((img, png))
    })
    .await??;
    debug!(width = img.width(), height = img.height(), "Foreground decoded");

    let bbox = state.vision().smart_crop(png).await?;
    debug!(?bbox, "Smart crop suggested");

    let cropped = spawn_blocking(move || -> Result<_, ImageError> {
        let crop_box = CropBox::new(bbox.x, bbox.y, bbox.width, bbox.height);
        let cropped = crop(&img, crop_box).ok_or(ImageError::EmptyCrop)?;
        encode_png(&resize_exact(&cropped, CANVAS_SIZE, CANVAS_SIZE))
    })
    .await??;

    let removed = state.vision().remove_background(cropped).await?;
    let png = spawn_blocking(move || encode_png(&decode_rgba(&removed)?)).await??;

    let url = state.blob().upload_png(png).await?;
    info!(blob = azure_client::redact_url(url.as_str()), "Background removed");
    Ok(url)
}

/// Place the foreground onto every background, one upload per result.
///
/// The placement is decided once from the foreground's edges and reused for
/// each background, which are processed in order.
pub async fn combine_images(
    state: &SharedState,
    foreground_url: &str,
    background_urls: &[String],
) -> Result<Vec<Url>, ServiceError> {
    if foreground_url.trim().is_empty() {
        return Err(ServiceError::precondition("ForegroundImage is required"));
    }
    if background_urls.is_empty() {
        return Err(ServiceError::precondition("BackgroundImages must not be empty"));
    }

    let bytes = fetch_image(state.http(), foreground_url).await?;
    let foreground = spawn_blocking(move || -> Result<_, ImageError> {
        let fg = decode_rgba(&bytes)?;
        Ok(Arc::new(PlacedForeground::new(&fg)))
    })
    .await??;

    let mut urls = Vec::with_capacity(background_urls.len());
    for (index, background_url) in background_urls.iter().enumerate() {
        if state.shutdown_token().is_cancelled() {
            return Err(ServiceError::ShuttingDown);
        }

        let bytes = fetch_image(state.http(), background_url).await?;
        let fg = Arc::clone(&foreground);
        let png = spawn_blocking(move || -> Result<_, ImageError> {
            let background = decode_rgba(&bytes)?;
            encode_png(&fg.draw_onto(&background))
        })
        .await??;

        let url = state.blob().upload_png(png).await?;
        debug!(index, "Combined image uploaded");
        urls.push(url);
    }

    info!(count = urls.len(), "Images combined");
    Ok(urls)
}
