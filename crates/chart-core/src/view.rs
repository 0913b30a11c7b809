// File: crates/chart-core/src/view.rs
// First-class view state: visible ranges and helpers for autoscale and pan/zoom.

use crate::geometry::PlotRect;
use crate::types::Insets;
use crate::Chart;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewState {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl Default for ViewState {
    fn default() -> Self {
        Self { x_min: 0.0, x_max: 1.0, y_min: 0.0, y_max: 1.0 }
    }
}

impl ViewState {
    /// Data extents over every series, padded by `margin` (fraction of the span) on
    /// all four sides. Charts without finite points get the unit square.
    pub fn from_chart(chart: &Chart, margin: f64) -> Self {
        let mut bounds: Option<(f64, f64, f64, f64)> = None;
        for s in &chart.series {
            if let Some((xl, xh, yl, yh)) = s.bounds() {
                bounds = Some(match bounds {
                    None => (xl, xh, yl, yh),
                    Some((a, b, c, d)) => (a.min(xl), b.max(xh), c.min(yl), d.max(yh)),
                });
            }
        }
        let Some((x_min, mut x_max, y_min, mut y_max)) = bounds else {
            return Self::default();
        };
        if (x_max - x_min).abs() < 1e-9 { x_max = x_min + 1.0; }
        if (y_max - y_min).abs() < 1e-9 { y_max = y_min + 1.0; }
        let m = margin.max(0.0);
        let xm = (x_max - x_min) * m;
        let ym = (y_max - y_min) * m;
        Self { x_min: x_min - xm, x_max: x_max + xm, y_min: y_min - ym, y_max: y_max + ym }
    }

    /// Current ranges of the chart's axes.
    pub fn of_axes(chart: &Chart) -> Self {
        Self {
            x_min: chart.x_axis.min,
            x_max: chart.x_axis.max,
            y_min: chart.y_axis.min,
            y_max: chart.y_axis.max,
        }
    }

    pub fn apply_to_chart(&self, chart: &mut Chart) {
        chart.x_axis.set_range(self.x_min, self.x_max);
        chart.y_axis.set_range(self.y_min, self.y_max);
    }

    /// Shift the view by a drag of (dx, dy) screen pixels.
    pub fn pan_by_pixels(&mut self, dx: f64, dy: f64, width: i32, height: i32, insets: &Insets) {
        let rect = PlotRect::inside(width, height, insets);
        let wx = -dx / rect.width() as f64 * (self.x_max - self.x_min);
        // screen y grows downwards
        let wy = dy / rect.height() as f64 * (self.y_max - self.y_min);
        self.x_min += wx;
        self.x_max += wx;
        self.y_min += wy;
        self.y_max += wy;
    }

    /// Zoom by `scroll` (positive = in) keeping the data point under the cursor fixed.
    pub fn zoom_at_pixel(
        &mut self,
        scroll: f64,
        cursor_x: f64,
        cursor_y: f64,
        width: i32,
        height: i32,
        insets: &Insets,
    ) {
        let rect = PlotRect::inside(width, height, insets);
        let (l, r) = (rect.left as f64, rect.right as f64);
        let (t, b) = (rect.top as f64, rect.bottom as f64);
        let cx = cursor_x.clamp(l, r);
        let cy = cursor_y.clamp(t, b);
        let x_span = self.x_max - self.x_min;
        let y_span = self.y_max - self.y_min;
        let fx = (cx - l) / (r - l);
        let fy = (cy - t) / (b - t);
        let wx = self.x_min + fx * x_span;
        let wy = self.y_max - fy * y_span;
        let factor = (1.0 - scroll).clamp(0.1, 10.0);
        let nx = x_span * factor;
        let ny = y_span * factor;
        self.x_min = wx - fx * nx;
        self.x_max = self.x_min + nx;
        self.y_max = wy + fy * ny;
        self.y_min = self.y_max - ny;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Series;

    fn chart_with(points: Vec<(f64, f64)>) -> Chart {
        let mut c = Chart::new();
        c.add_series(Series::with_data("s", points));
        c
    }

    #[test]
    fn extents_without_margin() {
        let v = ViewState::from_chart(&chart_with(vec![(1.0, 10.0), (5.0, 50.0)]), 0.0);
        assert_eq!(v, ViewState { x_min: 1.0, x_max: 5.0, y_min: 10.0, y_max: 50.0 });
    }

    #[test]
    fn empty_chart_gets_unit_square() {
        let mut c = Chart::new();
        c.add_series(Series::new("empty"));
        assert_eq!(ViewState::from_chart(&c, 0.05), ViewState::default());
    }

    #[test]
    fn single_point_is_widened() {
        let v = ViewState::from_chart(&chart_with(vec![(2.0, 3.0)]), 0.0);
        assert_eq!((v.x_min, v.x_max), (2.0, 3.0));
        assert_eq!((v.y_min, v.y_max), (3.0, 4.0));
    }

    #[test]
    fn pan_moves_both_ends() {
        let mut v = ViewState { x_min: 0.0, x_max: 10.0, y_min: 0.0, y_max: 10.0 };
        let insets = Insets::new(0, 0, 0, 0);
        v.pan_by_pixels(-50.0, 0.0, 100, 100, &insets);
        assert!((v.x_min - 5.0).abs() < 1e-9);
        assert!((v.x_max - 15.0).abs() < 1e-9);
    }

    #[test]
    fn zoom_keeps_cursor_point() {
        let mut v = ViewState { x_min: 0.0, x_max: 10.0, y_min: 0.0, y_max: 10.0 };
        let insets = Insets::new(0, 0, 0, 0);
        v.zoom_at_pixel(0.5, 25.0, 50.0, 100, 100, &insets);
        assert!((v.x_max - v.x_min - 5.0).abs() < 1e-9);
        // data x under the cursor stays at 2.5
        assert!((v.x_min + 0.25 * (v.x_max - v.x_min) - 2.5).abs() < 1e-9);
    }
}
