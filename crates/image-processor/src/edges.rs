//! Edge-transparency classification for background-removed foregrounds.
//!
//! Sums the alpha channel along one row or column per border, a fixed
//! distance inside the image, and flags the borders whose sum is zero.

use image::RgbaImage;
use tracing::debug;

/// Distance in pixels from each border to the sampled row/column.
pub const EDGE_SAMPLE_OFFSET: u32 = 10;

/// One border of an image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    Top,
    Right,
    Bottom,
    Left,
}

impl Edge {
    pub const ALL: [Edge; 4] = [Edge::Top, Edge::Right, Edge::Bottom, Edge::Left];

    fn bit(self) -> u8 {
        match self {
            Edge::Top => EdgeFlags::TOP,
            Edge::Right => EdgeFlags::RIGHT,
            Edge::Bottom => EdgeFlags::BOTTOM,
            Edge::Left => EdgeFlags::LEFT,
        }
    }
}

/// Alpha sums of the four sampled lines.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EdgeTotals {
    pub top: u64,
    pub right: u64,
    pub bottom: u64,
    pub left: u64,
}

impl EdgeTotals {
    pub fn get(&self, edge: Edge) -> u64 {
        match edge {
            Edge::Top => self.top,
            Edge::Right => self.right,
            Edge::Bottom => self.bottom,
            Edge::Left => self.left,
        }
    }
}

/// 4-bit set of transparent borders: top = 8, right = 4, bottom = 2, left = 1.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct EdgeFlags(u8);

impl EdgeFlags {
    pub const TOP: u8 = 1 << 3;
    pub const RIGHT: u8 = 1 << 2;
    pub const BOTTOM: u8 = 1 << 1;
    pub const LEFT: u8 = 1 << 0;

    pub const NONE: EdgeFlags = EdgeFlags(0);
    pub const ALL_TRANSPARENT: EdgeFlags = EdgeFlags(0b1111);

    /// Build a flag set from raw bits. Bits above the low nibble are dropped.
    pub const fn from_bits(bits: u8) -> Self {
        Self(bits & 0b1111)
    }

    /// An edge is transparent exactly when its sampled alpha sum is zero.
    pub fn from_totals(totals: &EdgeTotals) -> Self {
        let bits = Edge::ALL
            .iter()
            .filter(|edge| totals.get(**edge) == 0)
            .fold(0u8, |acc, edge| acc | edge.bit());
        Self(bits)
    }

    pub const fn bits(self) -> u8 {
        self.0
    }

    pub fn is_transparent(self, edge: Edge) -> bool {
        self.0 & edge.bit() != 0
    }

    /// True when every bit of `other` is also set here.
    pub const fn contains(self, other: EdgeFlags) -> bool {
        self.0 & other.0 == other.0
    }
}

/// Sum the alpha channel along the four sampled lines.
///
/// Top samples row `EDGE_SAMPLE_OFFSET`, bottom samples row
/// `height - EDGE_SAMPLE_OFFSET`, and likewise for the columns. Lines that
/// fall outside the image contribute nothing.
pub fn edge_totals(img: &RgbaImage) -> EdgeTotals {
    let (width, height) = img.dimensions();
    let top_row = Some(EDGE_SAMPLE_OFFSET).filter(|y| *y < height);
    let bottom_row = height
        .checked_sub(EDGE_SAMPLE_OFFSET)
        .filter(|y| *y < height);
    let left_col = Some(EDGE_SAMPLE_OFFSET).filter(|x| *x < width);
    let right_col = width.checked_sub(EDGE_SAMPLE_OFFSET).filter(|x| *x < width);

    let row_sum = |row: Option<u32>| -> u64 {
        row.map_or(0, |y| {
            (0..width)
                .map(|x| u64::from(img.get_pixel(x, y)[3]))
                .sum()
        })
    };
    let col_sum = |col: Option<u32>| -> u64 {
        col.map_or(0, |x| {
            (0..height)
                .map(|y| u64::from(img.get_pixel(x, y)[3]))
                .sum()
        })
    };

    EdgeTotals {
        top: row_sum(top_row),
        right: col_sum(right_col),
        bottom: row_sum(bottom_row),
        left: col_sum(left_col),
    }
}

/// Classify which borders of `img` are fully transparent at the sampled offset.
pub fn classify_edges(img: &RgbaImage) -> EdgeFlags {
    let totals = edge_totals(img);
    let flags = EdgeFlags::from_totals(&totals);
    debug!(
        width = img.width(),
        height = img.height(),
        top = totals.top,
        right = totals.right,
        bottom = totals.bottom,
        left = totals.left,
        flags = flags.bits(),
        "Classified foreground edges"
    );
    flags
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    const OPAQUE: Rgba<u8> = Rgba([10, 20, 30, 255]);

    /// Transparent canvas with an opaque square spanning `[from, to)` on both axes.
    fn square_subject(size: u32, from: u32, to: u32) -> RgbaImage {
        RgbaImage::from_fn(size, size, |x, y| {
            if (from..to).contains(&x) && (from..to).contains(&y) {
                OPAQUE
            } else {
                Rgba([0, 0, 0, 0])
            }
        })
    }

    #[test]
    fn transparent_border_flags_every_edge() {
        let img = square_subject(200, 20, 180);
        let totals = edge_totals(&img);
        assert_eq!(totals, EdgeTotals::default());
        assert_eq!(classify_edges(&img), EdgeFlags::ALL_TRANSPARENT);
    }

    #[test]
    fn fully_opaque_image_flags_nothing() {
        let img = RgbaImage::from_pixel(64, 64, OPAQUE);
        assert_eq!(classify_edges(&img), EdgeFlags::NONE);
        assert_eq!(edge_totals(&img).top, 64 * 255);
    }

    #[test]
    fn subject_in_bottom_left_flags_top_and_right() {
        let img = RgbaImage::from_fn(100, 100, |x, y| {
            if x < 50 && y >= 50 {
                OPAQUE
            } else {
                Rgba([0, 0, 0, 0])
            }
        });
        let flags = classify_edges(&img);
        assert_eq!(flags.bits(), 12);
        assert!(flags.is_transparent(Edge::Top));
        assert!(flags.is_transparent(Edge::Right));
        assert!(!flags.is_transparent(Edge::Bottom));
        assert!(!flags.is_transparent(Edge::Left));
    }

    #[test]
    fn bottom_and_right_sample_at_size_minus_offset() {
        let mut img = RgbaImage::new(50, 40);
        img.put_pixel(3, 30, Rgba([0, 0, 0, 7]));
        img.put_pixel(40, 3, Rgba([0, 0, 0, 9]));
        let totals = edge_totals(&img);
        assert_eq!(totals.bottom, 7);
        assert_eq!(totals.right, 9);
        assert_eq!(totals.top, 0);
        assert_eq!(totals.left, 0);
    }

    #[test]
    fn opaque_pixel_off_the_sampled_lines_is_ignored() {
        let mut img = RgbaImage::new(100, 100);
        img.put_pixel(50, 50, OPAQUE);
        assert_eq!(classify_edges(&img), EdgeFlags::ALL_TRANSPARENT);
    }

    #[test]
    fn opaque_pixel_on_a_sampled_line_marks_that_edge() {
        let mut img = RgbaImage::new(100, 100);
        img.put_pixel(50, EDGE_SAMPLE_OFFSET, Rgba([0, 0, 0, 1]));
        let flags = classify_edges(&img);
        assert!(!flags.is_transparent(Edge::Top));
        assert_eq!(flags.bits(), EdgeFlags::RIGHT | EdgeFlags::BOTTOM | EdgeFlags::LEFT);
    }

    #[test]
    fn classification_is_idempotent() {
        let img = square_subject(120, 0, 60);
        assert_eq!(classify_edges(&img), classify_edges(&img));
    }

    #[test]
    fn tiny_image_has_no_sampled_lines() {
        let img = RgbaImage::from_pixel(8, 8, OPAQUE);
        assert_eq!(edge_totals(&img), EdgeTotals::default());
        assert_eq!(classify_edges(&img), EdgeFlags::ALL_TRANSPARENT);
    }

    #[test]
    fn from_bits_masks_high_nibble() {
        assert_eq!(EdgeFlags::from_bits(0xF3).bits(), 3);
    }

    #[test]
    fn contains_checks_every_bit() {
        let top_right = EdgeFlags::from_bits(EdgeFlags::TOP | EdgeFlags::RIGHT);
        assert!(EdgeFlags::ALL_TRANSPARENT.contains(top_right));
        assert!(top_right.contains(EdgeFlags::from_bits(EdgeFlags::TOP)));
        assert!(!top_right.contains(EdgeFlags::from_bits(EdgeFlags::LEFT)));
        assert!(top_right.contains(EdgeFlags::NONE));
    }
}
