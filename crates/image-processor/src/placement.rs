//! Placement of a classified foreground on the square background canvas.

use crate::edges::EdgeFlags;

/// Side length of the generated background canvas.
pub const CANVAS_SIZE: u32 = 1024;

/// Side length a classified foreground is resized to.
pub const PLACED_SIZE: u32 = 724;

/// Gap left between a corner-anchored foreground and the opposite borders.
const CORNER_MARGIN: u32 = CANVAS_SIZE - PLACED_SIZE;

/// Offset that centers a placed foreground.
const CENTER_OFFSET: u32 = 150;

/// Where a foreground goes, keyed by its edge flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// Flags 0: no sampled edge is transparent.
    Centered,
    /// Flags 12: top and right transparent.
    BottomLeft,
    /// Flags 9: top and left transparent.
    BottomRight,
    /// Flags 6: bottom and right transparent.
    TopLeft,
    /// Flags 3: bottom and left transparent.
    TopRight,
    /// Any other flag value. The foreground is drawn as-is at the origin.
    Unclassified,
}

impl Placement {
    pub fn from_flags(flags: EdgeFlags) -> Self {
        match flags.bits() {
            0 => Placement::Centered,
            12 => Placement::BottomLeft,
            9 => Placement::BottomRight,
            6 => Placement::TopLeft,
            3 => Placement::TopRight,
            _ => Placement::Unclassified,
        }
    }

    pub fn decision(self) -> PlacementDecision {
        let placed = Some((PLACED_SIZE, PLACED_SIZE));
        match self {
            Placement::Centered => PlacementDecision::new(placed, (CENTER_OFFSET, CENTER_OFFSET)),
            Placement::BottomLeft => PlacementDecision::new(placed, (0, CORNER_MARGIN)),
            Placement::BottomRight => {
                PlacementDecision::new(placed, (CORNER_MARGIN, CORNER_MARGIN))
            }
            Placement::TopLeft => PlacementDecision::new(placed, (0, 0)),
            Placement::TopRight => PlacementDecision::new(placed, (CORNER_MARGIN, 0)),
            Placement::Unclassified => PlacementDecision::new(None, (0, 0)),
        }
    }
}

/// Resize target and canvas offset for one composition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlacementDecision {
    /// `None` keeps the foreground's original dimensions.
    pub resize: Option<(u32, u32)>,
    pub offset: (u32, u32),
}

impl PlacementDecision {
    pub const fn new(resize: Option<(u32, u32)>, offset: (u32, u32)) -> Self {
        Self { resize, offset }
    }
}

/// Map an edge flag set to its placement decision.
pub fn select_placement(flags: EdgeFlags) -> PlacementDecision {
    Placement::from_flags(flags).decision()
}
