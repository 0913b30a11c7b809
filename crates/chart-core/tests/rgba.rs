// File: crates/chart-core/tests/rgba.rs
// Purpose: Validate RGBA rendering buffer shape and a few pixels.

use chart_core::{Axis, Chart, RenderOptions, Series, Theme};

fn diagonal_chart() -> Chart {
    let mut chart = Chart::new();
    chart.x_axis = Axis::new("X", 0.0, 4.0);
    chart.y_axis = Axis::new("Y", 0.0, 4.0);
    chart.add_series(Series::with_data("diag", vec![(0.0, 0.0), (4.0, 4.0)]));
    chart
}

#[test]
fn render_rgba8_buffer() {
    let chart = diagonal_chart();
    let mut opts = RenderOptions::default();
    opts.draw_labels = false; // avoid font variance
    let (px, w, h, stride) = chart.render_to_rgba8(&opts).expect("rgba render");
    assert_eq!(w as usize * h as usize * 4, px.len());
    assert_eq!(stride, (w as usize) * 4);

    // Top-left pixel is opaque light-theme background
    assert_eq!(&px[0..4], &[255, 255, 255, 255]);
}

#[test]
fn dark_theme_changes_background() {
    let chart = diagonal_chart();
    let mut opts = RenderOptions::default();
    opts.draw_labels = false;
    opts.theme = Theme::dark();
    let (px, _, _, _) = chart.render_to_rgba8(&opts).expect("rgba render");
    assert_eq!(&px[0..4], &[18, 18, 20, 255]);
}

#[test]
fn series_colour_reaches_the_plot() {
    let mut chart = diagonal_chart();
    chart.show_legend = false;
    chart.show_grid = false;
    let mut opts = RenderOptions::default();
    opts.draw_labels = false;
    let theme = opts.theme;
    let (px, w, _, stride) = chart.render_to_rgba8(&opts).expect("rgba render");

    // centre of the plot rect lies on the diagonal
    let rect = chart_core::geometry::PlotRect::inside(opts.width, opts.height, &opts.insets);
    let (cx, cy) = (rect.center_x().round() as usize, rect.center_y().round() as usize);
    let expected = theme.series_color(0);
    let near = (cy.saturating_sub(2)..=cy + 2).any(|y| {
        (cx.saturating_sub(2)..=(cx + 2).min(w as usize - 1)).any(|x| {
            let i = y * stride + x * 4;
            let close = |a: u8, b: u8| (a as i32 - b as i32).abs() <= 48;
            close(px[i], expected.r()) && close(px[i + 1], expected.g()) && close(px[i + 2], expected.b())
        })
    });
    assert!(near, "expected series colour near plot centre");
}
