// File: crates/pulse-core/src/types.rs
// Summary: Shared types and constants (default sizes, paddings, margins).

use crate::color::Color;

/// Default chart color (`#3b82f6`).
pub const DEFAULT_COLOR: Color = Color::rgb(0x3b, 0x82, 0xf6);
/// Default bar/line viewport height.
pub const DEFAULT_HEIGHT: f64 = 300.0;
/// Default pie diameter (including the 20px ring margin).
pub const DEFAULT_PIE_SIZE: f64 = 250.0;
/// Fixed line chart viewport width.
pub const LINE_VIEW_WIDTH: f64 = 600.0;
/// Line chart inner padding on every side.
pub const LINE_PADDING: f64 = 40.0;

/// Horizontal gap between bars; half of it leads the first bar.
pub const BAR_GAP: f64 = 20.0;
/// Vertical space reserved for value/category labels around the bars.
pub const BAR_MARGIN: f64 = 40.0;
/// Width budget split across bars before clamping.
pub const BAR_WIDTH_BUDGET: f64 = 300.0;
pub const BAR_WIDTH_MIN: f64 = 40.0;
pub const BAR_WIDTH_MAX: f64 = 80.0;

/// Margin between the pie ring and the viewport edge.
pub const PIE_RING_MARGIN: f64 = 20.0;

/// Screen margins, in pixels.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Insets {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Insets {
    /// Create new insets (non-negative by type).
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self { left, right, top, bottom }
    }
    pub const fn uniform(v: u32) -> Self { Self::new(v, v, v, v) }
    /// Total horizontal inset (left + right).
    pub const fn hsum(&self) -> u32 { self.left + self.right }
    /// Total vertical inset (top + bottom).
    pub const fn vsum(&self) -> u32 { self.top + self.bottom }
}

impl Default for Insets {
    /// Room for the guide labels bars draw left of x = 0.
    fn default() -> Self {
        Self::new(64, 16, 24, 16)
    }
}
