//! Image processing for composing product photos onto generated backgrounds.
//!
//! Provides edge-transparency classification and placement selection for
//! background-removed foregrounds, alpha compositing, resize/crop helpers,
//! and nearest-swatch hue counting over a fixed 16-hue palette.

pub mod codec;
pub mod compose;
pub mod edges;
pub mod palette;
pub mod placement;
pub mod resize;

// Re-exports for convenience
pub use codec::{decode_rgba, encode_png};
pub use compose::{PlacedForeground, composite, draw_at, place_foreground};
pub use edges::{Edge, EdgeFlags, EdgeTotals, classify_edges, edge_totals};
pub use palette::{
    HueMatchCounts, PALETTE, PaletteEntry, PixelSample, count_hue_matches, dominant_hues,
    matched_top_hues,
    sample_pixels, top_hues,
};
pub use placement::{CANVAS_SIZE, PLACED_SIZE, Placement, PlacementDecision, select_placement};
pub use resize::{CropBox, crop, resize_exact};

/// Errors from decoding or encoding image data.
#[derive(Debug, thiserror::Error)]
pub enum ImageError {
    #[error("Failed to decode image: {0}")]
    Decode(#[source] image::ImageError),

    #[error("Failed to encode image: {0}")]
    Encode(#[source] image::ImageError),

    #[error("Image has no pixels")]
    EmptyImage,

    #[error("Crop box lies outside the image")]
    EmptyCrop,
}
