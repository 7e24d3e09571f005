// File: crates/chart-core/src/types.rs
// Summary: Shared types and constants (DPI, default sizes, plot margins).

/// Device-independent resolution used to convert point sizes into pixels.
pub const DPI: f32 = 100.0;

/// Default surface width in pixels.
pub const WIDTH: u32 = 1920;
/// Default surface height in pixels.
pub const HEIGHT: u32 = 1080;

/// Convert typographic points into canvas pixels.
#[inline]
pub fn pt_to_px(pt: f32) -> f32 {
    pt * DPI / 72.0
}

/// Plot area edges as fractions of the figure, measured from the left/bottom.
/// Contract: `left < right` and `bottom < top`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Margins {
    pub left: f32,
    pub right: f32,
    pub bottom: f32,
    pub top: f32,
}

impl Margins {
    pub const fn new(left: f32, right: f32, bottom: f32, top: f32) -> Self {
        Self { left, right, bottom, top }
    }
    /// Horizontal share of the figure taken by the plot.
    pub fn hspan(&self) -> f32 { self.right - self.left }
    /// Vertical share of the figure taken by the plot.
    pub fn vspan(&self) -> f32 { self.top - self.bottom }
}

impl Default for Margins {
    fn default() -> Self {
        Self::new(0.1, 0.95, 0.11, 0.88)
    }
}

/// Position in axes-fraction coordinates: (0,0) is the plot's bottom-left, (1,1) its top-right.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Anchor {
    pub x: f32,
    pub y: f32,
}

impl Anchor {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}
