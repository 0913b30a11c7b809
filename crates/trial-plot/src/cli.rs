// File: crates/trial-plot/src/cli.rs
// Summary: Command-line arguments and their mapping onto PlotConfig.

use std::path::PathBuf;

use chart_core::types::{HEIGHT, WIDTH};
use clap::Parser;

use crate::config::{PlotConfig, DEFAULT_PREFIX, DEFAULT_TRIALS};

/// Plot benchmark durations of repeated trials against the base exponent.
#[derive(Debug, Parser)]
#[command(name = "trial-plot")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Base name shared by the input files and the output image
    #[arg(short, long, default_value = DEFAULT_PREFIX)]
    pub prefix: String,

    /// Number of trials; reads {prefix}_1.txt through {prefix}_N.txt
    #[arg(short = 'n', long, default_value_t = DEFAULT_TRIALS)]
    pub trials: u32,

    /// Explicit trial index to read (repeatable); overrides --trials
    #[arg(short, long = "index", value_name = "INDEX")]
    pub indices: Vec<u32>,

    /// Directory holding the trial files
    #[arg(long, default_value = ".")]
    pub input_dir: PathBuf,

    /// Directory the PNG is written to
    #[arg(short, long, default_value = ".")]
    pub output_dir: PathBuf,

    /// Image width in pixels
    #[arg(long, default_value_t = WIDTH)]
    pub width: i32,

    /// Image height in pixels
    #[arg(long, default_value_t = HEIGHT)]
    pub height: i32,

    /// Colour theme (light, dark)
    #[arg(long, default_value = "light")]
    pub theme: String,

    /// Save the image without opening the preview window
    #[arg(long)]
    pub no_show: bool,

    /// Verbosity level (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    }

    pub fn to_config(&self) -> PlotConfig {
        let trial_indices = if self.indices.is_empty() {
            (1..=self.trials).collect()
        } else {
            self.indices.clone()
        };
        PlotConfig {
            prefix: self.prefix.clone(),
            trial_indices,
            input_dir: self.input_dir.clone(),
            output_dir: self.output_dir.clone(),
            show: !self.no_show,
            width: self.width,
            height: self.height,
            theme: self.theme.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("trial-plot").chain(args.iter().copied())).expect("parse")
    }

    #[test]
    fn no_arguments_gives_default_config() {
        assert_eq!(parse(&[]).to_config(), PlotConfig::default());
    }

    #[test]
    fn trials_count_expands_to_range() {
        let c = parse(&["--trials", "5", "--prefix", "mulK"]).to_config();
        assert_eq!(c.trial_indices, vec![1, 2, 3, 4, 5]);
        assert_eq!(c.prefix, "mulK");
    }

    #[test]
    fn explicit_indices_win() {
        let c = parse(&["-n", "5", "-i", "2", "-i", "7"]).to_config();
        assert_eq!(c.trial_indices, vec![2, 7]);
    }

    #[test]
    fn no_show_and_verbosity() {
        let cli = parse(&["--no-show", "-vv"]);
        assert!(!cli.to_config().show);
        assert_eq!(cli.log_level(), "debug");
        assert_eq!(parse(&[]).log_level(), "warn");
    }
}
