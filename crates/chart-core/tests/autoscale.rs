// File: crates/chart-core/tests/autoscale.rs
// Purpose: Validate autoscale over several series.

use chart_core::{Chart, Series};

#[test]
fn autoscale_spans_every_series() {
    let mut chart = Chart::new();
    chart.add_series(Series::with_data("a", vec![(0.0, 1.0), (5.0, 3.0)]));
    chart.add_series(Series::with_data("b", vec![(2.0, 6.0), (3.0, 1.5)]));
    chart.add_series(Series::new("empty"));

    chart.autoscale_axes(0.0);

    assert_eq!(chart.x_axis.min, 0.0);
    assert_eq!(chart.x_axis.max, 5.0);
    assert_eq!(chart.y_axis.min, 1.0);
    assert_eq!(chart.y_axis.max, 6.0);
}

#[test]
fn autoscale_margin_pads_both_sides() {
    let mut chart = Chart::new();
    chart.add_series(Series::with_data("a", vec![(1.0, 1000.0), (5.0, 5000.0)]));
    chart.autoscale_axes(0.05);

    assert!((chart.x_axis.min - 0.8).abs() < 1e-9);
    assert!((chart.x_axis.max - 5.2).abs() < 1e-9);
    assert!((chart.y_axis.min - 800.0).abs() < 1e-9);
    assert!((chart.y_axis.max - 5200.0).abs() < 1e-9);
}

#[test]
fn labels_survive_autoscale() {
    let mut chart = Chart::new();
    chart.x_axis.label = "Base (2^)".into();
    chart.add_series(Series::with_data("a", vec![(1.0, 1.0), (2.0, 2.0)]));
    chart.autoscale_axes(0.05);
    assert_eq!(chart.x_axis.label, "Base (2^)");
}
