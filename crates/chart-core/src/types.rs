// File: crates/chart-core/src/types.rs
// Summary: Shared types and constants (sizes, paddings, font sizes).

/// Default surface width in pixels.
pub const WIDTH: i32 = 1024;
/// Default surface height in pixels.
pub const HEIGHT: i32 = 640;

/// Title font size in pixels.
pub const TITLE_FONT_SIZE: f32 = 18.0;
/// Axis label font size in pixels.
pub const AXIS_LABEL_FONT_SIZE: f32 = 14.0;
/// Tick label font size in pixels.
pub const TICK_FONT_SIZE: f32 = 12.0;
/// Legend entry font size in pixels.
pub const LEGEND_FONT_SIZE: f32 = 13.0;

/// Screen margins around the plot area, in pixels.
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
}

impl Default for Insets {
    // room for the y label + tick labels on the left, title on top, x label below
    fn default() -> Self {
        Self::new(96, 32, 52, 64)
    }
}
