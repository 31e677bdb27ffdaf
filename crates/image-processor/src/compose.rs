//! Foreground-onto-background composition.

use image::{Rgba, RgbaImage};
use tracing::debug;

use crate::edges::classify_edges;
use crate::placement::{PlacementDecision, select_placement};
use crate::resize::resize_exact;

/// Draw `top` onto `base` with its top-left corner at (`x`, `y`).
///
/// Source-over alpha compositing with `opacity` (0.0..=1.0) applied on top of
/// each source pixel's own alpha. Pixels that land outside `base` are clipped.
pub fn draw_at(base: &mut RgbaImage, top: &RgbaImage, x: u32, y: u32, opacity: f32) {
    let opacity = opacity.clamp(0.0, 1.0);
    for (dx, dy, pixel) in top.enumerate_pixels() {
        let (Some(target_x), Some(target_y)) = (x.checked_add(dx), y.checked_add(dy)) else {
            continue;
        };
        if target_x >= base.width() || target_y >= base.height() {
            continue;
        }
        let alpha = f32::from(pixel[3]) / 255.0 * opacity;
        if alpha > 0.0 {
            let bg = base.get_pixel(target_x, target_y);
            let blended = blend_pixel(bg, pixel, alpha);
            base.put_pixel(target_x, target_y, blended);
        }
    }
}

/// Resize the foreground per `decision` and draw it onto a copy of the background.
pub fn composite(
    background: &RgbaImage,
    foreground: &RgbaImage,
    decision: &PlacementDecision,
) -> RgbaImage {
    let mut canvas = background.clone();
    let (x, y) = decision.offset;
    match decision.resize {
        Some((w, h)) => {
            let resized = resize_exact(foreground, w, h);
            draw_at(&mut canvas, &resized, x, y, 1.0);
        }
        None => draw_at(&mut canvas, foreground, x, y, 1.0),
    }
    canvas
}

/// A foreground already classified and resized, ready to draw onto any
/// number of backgrounds.
#[derive(Debug, Clone)]
pub struct PlacedForeground {
    pub decision: PlacementDecision,
    image: RgbaImage,
}

impl PlacedForeground {
    /// Classify the foreground's edges, pick its placement, and resize once.
    pub fn new(foreground: &RgbaImage) -> Self {
        let decision = select_placement(classify_edges(foreground));
        debug!(?decision, "Placing foreground");
        let image = match decision.resize {
            Some((w, h)) => resize_exact(foreground, w, h),
            None => foreground.clone(),
        };
        Self { decision, image }
    }

    /// Draw onto a copy of `background` at the chosen offset.
    pub fn draw_onto(&self, background: &RgbaImage) -> RgbaImage {
        let mut canvas = background.clone();
        let (x, y) = self.decision.offset;
        draw_at(&mut canvas, &self.image, x, y, 1.0);
        canvas
    }
}

/// Classify the foreground's edges, pick its placement, and composite it.
pub fn place_foreground(
    background: &RgbaImage,
    foreground: &RgbaImage,
) -> (PlacementDecision, RgbaImage) {
    let placed = PlacedForeground::new(foreground);
    let combined = placed.draw_onto(background);
    (placed.decision, combined)
}

fn blend_pixel(bg: &Rgba<u8>, fg: &Rgba<u8>, alpha: f32) -> Rgba<u8> {
    let bg_alpha = f32::from(bg[3]) / 255.0;
    let out_alpha = alpha + bg_alpha * (1.0 - alpha);
    if out_alpha <= 0.0 {
        return Rgba([0, 0, 0, 0]);
    }
    let channel = |i: usize| -> u8 {
        let c = (f32::from(fg[i]) * alpha + f32::from(bg[i]) * bg_alpha * (1.0 - alpha)) / out_alpha;
        c.round().clamp(0.0, 255.0) as u8
    };
    Rgba([
        channel(0),
        channel(1),
        channel(2),
        (out_alpha * 255.0).round().clamp(0.0, 255.0) as u8,
    ])
}
