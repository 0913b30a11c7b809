// File: crates/trial-plot/src/main.rs
// Summary: CLI binary: plots `{prefix}_{1..N}.txt` into `{prefix}.png` and opens a preview.

use anyhow::Result;
use clap::Parser;
use log::info;

use trial_plot::cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(cli.log_level())).init();

    let config = cli.to_config();
    let report = trial_plot::run(&config)?;
    info!(
        "plotted {} series ({:?} points) into {}",
        report.series_points.len(),
        report.series_points,
        report.output.display()
    );
    Ok(())
}
