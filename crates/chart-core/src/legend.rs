// File: crates/chart-core/src/legend.rs
// Summary: Legend box layout (pure geometry) and drawing.

use skia_safe as skia;

use crate::geometry::PlotRect;
use crate::text::{HAlign, TextShaper, VAlign};
use crate::theme::Theme;
use crate::types::LEGEND_FONT_SIZE;

const PAD: f32 = 8.0;
const SWATCH: f32 = 28.0;
const GAP: f32 = 8.0;
const OFFSET: f32 = 10.0;
/// Height of one legend row.
pub const ROW_HEIGHT: f32 = LEGEND_FONT_SIZE * 1.6;

/// One legend row: the swatch line segment and where its label starts.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LegendRow {
    pub swatch_from: (f32, f32),
    pub swatch_to: (f32, f32),
    pub text_x: f32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct LegendLayout {
    pub frame: PlotRect,
    pub rows: Vec<LegendRow>,
}

impl LegendLayout {
    /// Stack one row per label width in the upper-left corner of `plot`.
    pub fn upper_left(plot: &PlotRect, label_widths: &[f32], row_height: f32) -> Self {
        let text_w = label_widths.iter().copied().fold(0.0f32, f32::max);
        let left = plot.left + OFFSET;
        let top = plot.top + OFFSET;
        let width = PAD + SWATCH + GAP + text_w + PAD;
        let height = PAD * 2.0 + row_height * label_widths.len() as f32;
        let rows = (0..label_widths.len())
            .map(|i| {
                let cy = top + PAD + row_height * (i as f32 + 0.5);
                LegendRow {
                    swatch_from: (left + PAD, cy),
                    swatch_to: (left + PAD + SWATCH, cy),
                    text_x: left + PAD + SWATCH + GAP,
                }
            })
            .collect();
        Self { frame: PlotRect::from_ltrb(left, top, left + width, top + height), rows }
    }
}

/// Draw a legend for `entries` (label, colour). Labels are only shaped when
/// `shaper` is given; otherwise the box holds swatches only.
pub fn draw_legend(
    canvas: &skia::Canvas,
    plot: &PlotRect,
    entries: &[(&str, skia::Color)],
    theme: &Theme,
    shaper: Option<&TextShaper>,
) {
    if entries.is_empty() {
        return;
    }
    let widths: Vec<f32> = entries
        .iter()
        .map(|(label, _)| shaper.map(|s| s.measure(label, LEGEND_FONT_SIZE).0).unwrap_or(0.0))
        .collect();
    let layout = LegendLayout::upper_left(plot, &widths, ROW_HEIGHT);
    let frame = skia::Rect::from_ltrb(layout.frame.left, layout.frame.top, layout.frame.right, layout.frame.bottom);
    let rrect = skia::RRect::new_rect_xy(frame, 3.0, 3.0);

    let mut fill = skia::Paint::default();
    fill.set_anti_alias(true);
    fill.set_style(skia::paint::Style::Fill);
    fill.set_color(theme.legend_background);
    canvas.draw_rrect(rrect, &fill);

    let mut border = skia::Paint::default();
    border.set_anti_alias(true);
    border.set_style(skia::paint::Style::Stroke);
    border.set_stroke_width(1.0);
    border.set_color(theme.legend_border);
    canvas.draw_rrect(rrect, &border);

    let mut swatch = skia::Paint::default();
    swatch.set_anti_alias(true);
    swatch.set_style(skia::paint::Style::Stroke);
    swatch.set_stroke_width(2.0);
    for (row, (label, color)) in layout.rows.iter().zip(entries) {
        swatch.set_color(*color);
        canvas.draw_line(row.swatch_from, row.swatch_to, &swatch);
        if let Some(s) = shaper {
            s.draw(canvas, label, row.text_x, row.swatch_from.1, LEGEND_FONT_SIZE, theme.axis_label, HAlign::Left, VAlign::Middle);
        }
    }
}
