// File: crates/trial-plot/src/render.rs
// Summary: Builds the duration-vs-base chart from loaded trials.

use chart_core::{theme, Axis, Chart, RenderOptions, Series};

use crate::config::PlotConfig;
use crate::trial::Trial;

pub const X_LABEL: &str = "Base (2^)";
pub const Y_LABEL: &str = "Duration (ns)";
/// Fraction of the data span left free on each side of both axes.
pub const AXIS_MARGIN: f64 = 0.05;

/// Legend label of the series at 0-based `position`.
pub fn series_label(position: usize) -> String {
    format!("Try n°{position}")
}

/// One line series per trial, in trial order, points exactly as loaded.
pub fn build_chart(config: &PlotConfig, trials: &[Trial]) -> Chart {
    let mut chart = Chart::new();
    chart.set_title(config.title());
    chart.x_axis = Axis::new(X_LABEL, 0.0, 1.0);
    chart.y_axis = Axis::new(Y_LABEL, 0.0, 1.0);
    chart.show_grid = true;
    chart.show_legend = true;
    for (position, trial) in trials.iter().enumerate() {
        chart.add_series(Series::from_int_pairs(series_label(position), &trial.x, &trial.y));
    }
    chart.autoscale_axes(AXIS_MARGIN);
    chart
}

pub fn render_options(config: &PlotConfig) -> RenderOptions {
    RenderOptions {
        width: config.width,
        height: config.height,
        theme: theme::find(&config.theme),
        ..RenderOptions::default()
    }
}
