// File: crates/trial-plot/src/pipeline.rs
// Summary: Load -> Render -> Output driver.

use std::path::PathBuf;

use anyhow::{Context, Result};
use log::debug;

use crate::config::PlotConfig;
use crate::loader::load_trials;
use crate::output::{present, save_png, Presentation};
use crate::render::{build_chart, render_options};

/// Summary of a finished run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunReport {
    pub output: PathBuf,
    pub bytes_written: usize,
    /// Point count of each series, in series order.
    pub series_points: Vec<usize>,
    pub presentation: Presentation,
}

/// Run the whole pipeline. Nothing is written unless every trial loads.
pub fn run(config: &PlotConfig) -> Result<RunReport> {
    config.validate().context("invalid configuration")?;
    debug!("config: {config:?}");

    let trials = load_trials(config).context("failed to load trials")?;

    let chart = build_chart(config, &trials);
    let opts = render_options(config);

    let output = config.output_path();
    let bytes_written = save_png(&chart, &opts, &output)
        .with_context(|| format!("failed to save chart to {}", output.display()))?;

    let presentation = present(&chart, &opts, config.show).context("failed to show chart")?;

    Ok(RunReport {
        output,
        bytes_written,
        series_points: chart.series.iter().map(|s| s.len()).collect(),
        presentation,
    })
}
