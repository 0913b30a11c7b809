// File: crates/chart-core/tests/legend_pixels.rs
// Purpose: Pixel checks on rendered trial charts (legend rows, empty series, determinism).
// Behavior:
// - Renders with labels off so no font rasterisation enters the buffer.
// - Locates legend swatches through the public layout and samples their colour.

use chart_core::geometry::PlotRect;
use chart_core::legend::{LegendLayout, ROW_HEIGHT};
use chart_core::{Axis, Chart, RenderOptions, Series};
use skia_safe as skia;

fn three_trials() -> Chart {
    let mut chart = Chart::new();
    chart.x_axis = Axis::new("Base (2^)", 0.0, 1.0);
    chart.y_axis = Axis::new("Duration (ns)", 0.0, 1.0);
    for (i, scale) in [1.0, 1.1, 0.9].into_iter().enumerate() {
        let data = (1..=5).map(|k| (k as f64, 1000.0 * k as f64 * scale)).collect();
        chart.add_series(Series::with_data(format!("Try n°{i}"), data));
    }
    chart.autoscale_axes(0.05);
    chart
}

fn options() -> RenderOptions {
    let mut opts = RenderOptions::default();
    opts.draw_labels = false; // avoid text nondeterminism across platforms
    opts
}

fn render(chart: &Chart) -> Vec<u8> {
    chart.render_to_png_bytes(&options()).expect("render bytes")
}

fn legend_layout(chart: &Chart, opts: &RenderOptions) -> LegendLayout {
    let plot = PlotRect::inside(opts.width, opts.height, &opts.insets);
    // labels off: rows carry swatches only
    LegendLayout::upper_left(&plot, &vec![0.0; chart.series.len()], ROW_HEIGHT)
}

/// True when a pixel within one pixel of the middle of `row`'s swatch is close to `want`.
fn swatch_has_colour(px: &[u8], stride: usize, layout: &LegendLayout, row: usize, want: skia::Color) -> bool {
    let r = &layout.rows[row];
    let x = ((r.swatch_from.0 + r.swatch_to.0) * 0.5).round() as usize;
    let y = r.swatch_from.1.floor() as usize;
    let close = |a: u8, b: u8| (a as i32 - b as i32).abs() <= 40;
    (y.saturating_sub(1)..=y + 1).any(|y| {
        let i = y * stride + x * 4;
        close(px[i], want.r()) && close(px[i + 1], want.g()) && close(px[i + 2], want.b())
    })
}

#[test]
fn legend_has_a_swatch_per_trial() {
    let chart = three_trials();
    let opts = options();
    let (px, _, _, stride) = chart.render_to_rgba8(&opts).expect("rgba render");
    let layout = legend_layout(&chart, &opts);
    assert_eq!(layout.rows.len(), 3);
    for row in 0..3 {
        let want = opts.theme.series_color(row);
        assert!(swatch_has_colour(&px, stride, &layout, row, want), "row {row} swatch missing");
    }
}

#[test]
fn empty_series_keeps_its_legend_row() {
    let mut chart = three_trials();
    chart.series[1].data_xy.clear();
    let opts = options();
    let (px, _, _, stride) = chart.render_to_rgba8(&opts).expect("rgba render");
    let layout = legend_layout(&chart, &opts);

    assert!(swatch_has_colour(&px, stride, &layout, 1, opts.theme.series_color(1)));
    // the following row keeps its slot and colour
    assert!(swatch_has_colour(&px, stride, &layout, 2, opts.theme.series_color(2)));
}

#[test]
fn hidden_legend_draws_no_swatches() {
    let mut chart = three_trials();
    chart.show_legend = false;
    let opts = options();
    let (px, _, _, stride) = chart.render_to_rgba8(&opts).expect("rgba render");
    let layout = legend_layout(&chart, &opts);
    assert!(!swatch_has_colour(&px, stride, &layout, 1, opts.theme.series_color(1)));
}

#[test]
fn rendering_is_deterministic() {
    let chart = three_trials();
    let a = image::load_from_memory(&render(&chart)).expect("decode a").to_rgba8();
    let b = image::load_from_memory(&render(&chart)).expect("decode b").to_rgba8();
    assert_eq!(a.as_raw(), b.as_raw());
}
