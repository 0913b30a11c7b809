// File: crates/trial-plot/src/lib.rs
// Summary: Library entry point; loads trial files, builds the duration chart, saves and presents it.

pub mod cli;
pub mod config;
pub mod loader;
pub mod output;
pub mod pipeline;
pub mod render;
pub mod trial;

pub use config::{ConfigError, PlotConfig};
pub use loader::{load_trial, load_trials, parse_trial, LoadError};
pub use output::{OutputError, Presentation};
pub use pipeline::{run, RunReport};
pub use render::build_chart;
pub use trial::Trial;
