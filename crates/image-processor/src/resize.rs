//! Resize and crop helpers for foregrounds and backgrounds.
//!
//! Resizing uses Lanczos3 filtering. Crop boxes come from an external
//! smart-crop service and are clamped to the image before use.

use image::RgbaImage;
use image::imageops::{self, FilterType};
use tracing::debug;

/// Resize to exact dimensions, ignoring aspect ratio.
///
/// Returns a copy unchanged if the image already has the target size.
pub fn resize_exact(img: &RgbaImage, width: u32, height: u32) -> RgbaImage {
    let (orig_w, orig_h) = img.dimensions();

    if (orig_w, orig_h) == (width, height) {
        debug!(width, height, "Image already at target size, skipping resize");
        return img.clone();
    }

    debug!(
        orig_w,
        orig_h,
        new_width = width,
        new_height = height,
        "Resizing image"
    );

    imageops::resize(img, width.max(1), height.max(1), FilterType::Lanczos3)
}

/// Rectangle in pixel coordinates, as reported by the smart-crop service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CropBox {
    pub x: i64,
    pub y: i64,
    pub width: i64,
    pub height: i64,
}

impl CropBox {
    pub fn new(x: i64, y: i64, width: i64, height: i64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Intersect with a `width` x `height` image.
    ///
    /// Returns `(x, y, w, h)` in image coordinates, or `None` when the
    /// intersection is empty.
    pub fn clamp_to(&self, width: u32, height: u32) -> Option<(u32, u32, u32, u32)> {
        let left = self.x.max(0);
        let top = self.y.max(0);
        let right = (self.x + self.width).min(i64::from(width));
        let bottom = (self.y + self.height).min(i64::from(height));
        if right <= left || bottom <= top {
            return None;
        }
        Some((
            left as u32,
            top as u32,
            (right - left) as u32,
            (bottom - top) as u32,
        ))
    }
}

/// Crop `img` to the part of `crop_box` that lies inside it.
pub fn crop(img: &RgbaImage, crop_box: CropBox) -> Option<RgbaImage> {
    let (x, y, w, h) = crop_box.clamp_to(img.width(), img.height())?;
    debug!(x, y, w, h, "Cropping image");
    Some(imageops::crop_imm(img, x, y, w, h).to_image())
}
