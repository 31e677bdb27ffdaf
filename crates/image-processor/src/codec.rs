//! Decoding uploaded bytes and encoding results as PNG.

use std::io::Cursor;

use image::{ImageFormat, RgbaImage};
use tracing::debug;

use crate::ImageError;

/// Decode any supported format into RGBA8.
pub fn decode_rgba(bytes: &[u8]) -> Result<RgbaImage, ImageError> {
    if bytes.is_empty() {
        return Err(ImageError::EmptyImage);
    }
    let img = image::load_from_memory(bytes).map_err(ImageError::Decode)?;
    let rgba = img.to_rgba8();
    if rgba.width() == 0 || rgba.height() == 0 {
        return Err(ImageError::EmptyImage);
    }
    debug!(
        width = rgba.width(),
        height = rgba.height(),
        bytes = bytes.len(),
        "Decoded image"
    );
    Ok(rgba)
}

/// Encode an RGBA8 image as PNG.
pub fn encode_png(img: &RgbaImage) -> Result<Vec<u8>, ImageError> {
    let mut out = Cursor::new(Vec::new());
    img.write_to(&mut out, ImageFormat::Png)
        .map_err(ImageError::Encode)?;
    Ok(out.into_inner())
}
