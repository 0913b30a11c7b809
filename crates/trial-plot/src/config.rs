// File: crates/trial-plot/src/config.rs
// Summary: Run configuration (prefix, trial indices, directories, image size) and its validation.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use chart_core::types::{HEIGHT, WIDTH};
use thiserror::Error;

pub const DEFAULT_PREFIX: &str = "toBase2PowK";
pub const DEFAULT_TRIALS: u32 = 3;
/// Smallest accepted image edge in pixels.
pub const MIN_EDGE: i32 = 64;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("prefix must not be empty")]
    EmptyPrefix,
    #[error("prefix '{0}' must be a bare file name, not a path")]
    PrefixIsPath(String),
    #[error("at least one trial index is required")]
    NoTrials,
    #[error("trial index {0} is listed more than once")]
    DuplicateTrial(u32),
    #[error("image size {width}x{height} is below the {min}px minimum", min = MIN_EDGE)]
    ImageTooSmall { width: i32, height: i32 },
}

#[derive(Clone, Debug, PartialEq)]
pub struct PlotConfig {
    pub prefix: String,
    pub trial_indices: Vec<u32>,
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
    /// Open the interactive window after saving.
    pub show: bool,
    pub width: i32,
    pub height: i32,
    pub theme: String,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            prefix: DEFAULT_PREFIX.to_string(),
            trial_indices: (1..=DEFAULT_TRIALS).collect(),
            input_dir: PathBuf::from("."),
            output_dir: PathBuf::from("."),
            show: true,
            width: WIDTH,
            height: HEIGHT,
            theme: "light".to_string(),
        }
    }
}

impl PlotConfig {
    pub fn new(prefix: impl Into<String>, trial_indices: Vec<u32>) -> Self {
        Self { prefix: prefix.into(), trial_indices, ..Self::default() }
    }

    /// Read inputs from and write the image into `dir`.
    pub fn in_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.input_dir = dir.as_ref().to_path_buf();
        self.output_dir = dir.as_ref().to_path_buf();
        self
    }

    pub fn without_viewer(mut self) -> Self {
        self.show = false;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.prefix.is_empty() {
            return Err(ConfigError::EmptyPrefix);
        }
        if self.prefix.contains(['/', '\\']) {
            return Err(ConfigError::PrefixIsPath(self.prefix.clone()));
        }
        if self.trial_indices.is_empty() {
            return Err(ConfigError::NoTrials);
        }
        let mut seen = HashSet::new();
        if let Some(&dup) = self.trial_indices.iter().find(|&&i| !seen.insert(i)) {
            return Err(ConfigError::DuplicateTrial(dup));
        }
        if self.width < MIN_EDGE || self.height < MIN_EDGE {
            return Err(ConfigError::ImageTooSmall { width: self.width, height: self.height });
        }
        Ok(())
    }

    /// `{input_dir}/{prefix}_{index}.txt`
    pub fn trial_path(&self, index: u32) -> PathBuf {
        self.input_dir.join(format!("{}_{}.txt", self.prefix, index))
    }

    /// `{output_dir}/{prefix}.png`
    pub fn output_path(&self) -> PathBuf {
        self.output_dir.join(format!("{}.png", self.prefix))
    }

    pub fn title(&self) -> String {
        format!("Duration of {} depending on the base", self.prefix)
    }
}
