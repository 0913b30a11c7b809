// File: crates/chart-core/src/geometry.rs
// Summary: Plot rectangle and data-to-pixel projection.

use crate::axis::Axis;
use crate::types::Insets;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlotRect {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl PlotRect {
    pub const fn from_ltrb(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self { left, top, right, bottom }
    }

    /// Area left over once `insets` are removed from a `width` x `height` surface.
    /// Collapses to a 1px rect instead of inverting when insets exceed the surface.
    pub fn inside(width: i32, height: i32, insets: &Insets) -> Self {
        let left = insets.left as f32;
        let top = insets.top as f32;
        let right = (width as f32 - insets.right as f32).max(left + 1.0);
        let bottom = (height as f32 - insets.bottom as f32).max(top + 1.0);
        Self { left, top, right, bottom }
    }

    pub fn width(&self) -> f32 { self.right - self.left }
    pub fn height(&self) -> f32 { self.bottom - self.top }
    pub fn center_x(&self) -> f32 { (self.left + self.right) * 0.5 }
    pub fn center_y(&self) -> f32 { (self.top + self.bottom) * 0.5 }
}

/// Maps data coordinates into a plot rect using the axes' ranges.
#[derive(Clone, Copy, Debug)]
pub struct Projection {
    rect: PlotRect,
    x_min: f64,
    x_span: f64,
    y_min: f64,
    y_span: f64,
}

impl Projection {
    pub fn new(rect: PlotRect, x: &Axis, y: &Axis) -> Self {
        Self { rect, x_min: x.min, x_span: x.span(), y_min: y.min, y_span: y.span() }
    }

    #[inline]
    pub fn x(&self, x: f64) -> f32 {
        self.rect.left + ((x - self.x_min) / self.x_span) as f32 * self.rect.width()
    }

    #[inline]
    pub fn y(&self, y: f64) -> f32 {
        self.rect.bottom - ((y - self.y_min) / self.y_span) as f32 * self.rect.height()
    }

    #[inline]
    pub fn point(&self, (x, y): (f64, f64)) -> (f32, f32) {
        (self.x(x), self.y(y))
    }
}
