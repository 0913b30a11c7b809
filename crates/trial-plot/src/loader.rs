// File: crates/trial-plot/src/loader.rs
// Summary: Reads `{prefix}_{index}.txt` files of tab-separated integer pairs into Trials.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Read};
use std::path::{Path, PathBuf};

use log::{debug, info};
use thiserror::Error;

use crate::config::PlotConfig;
use crate::trial::Trial;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("missing input file {}", .path.display())]
    MissingInput { path: PathBuf },
    #[error("failed to read {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse {}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
    #[error("{}:{line}: {reason}", .path.display())]
    Malformed { path: PathBuf, line: u64, reason: String },
}

impl LoadError {
    pub fn path(&self) -> &Path {
        match self {
            LoadError::MissingInput { path }
            | LoadError::Read { path, .. }
            | LoadError::Decode { path, .. }
            | LoadError::Malformed { path, .. } => path,
        }
    }
}

/// Parse one trial from `reader`. `path` only labels diagnostics.
pub fn parse_trial<R: Read>(index: u32, path: &Path, reader: R) -> Result<Trial, LoadError> {
    let mut builder = csv::ReaderBuilder::new();
    builder
        .delimiter(b'\t')
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .trim(csv::Trim::All);

    let mut trial = Trial::new(index);
    let mut rec = csv::StringRecord::new();
    // one reader per physical line: csv skips blank lines without counting them
    for (n, text) in BufReader::new(reader).lines().enumerate() {
        let text = text.map_err(|source| LoadError::Read { path: path.to_path_buf(), source })?;
        if text.is_empty() {
            continue;
        }
        let line = n as u64 + 1;
        let read = builder
            .from_reader(text.as_bytes())
            .read_record(&mut rec)
            .map_err(|source| LoadError::Decode { path: path.to_path_buf(), source })?;
        if !read {
            continue;
        }
        let malformed = |reason: String| LoadError::Malformed { path: path.to_path_buf(), line, reason };

        if rec.len() != 2 {
            return Err(malformed(format!(
                "expected 2 tab-separated fields, found {}",
                rec.len()
            )));
        }
        let field = |i: usize, name: &str| -> Result<i64, LoadError> {
            let raw = &rec[i];
            raw.parse::<i64>()
                .map_err(|e| malformed(format!("{name} value '{raw}' is not an integer: {e}")))
        };
        let x = field(0, "x")?;
        let y = field(1, "y")?;
        trial.push(x, y);
    }

    if !trial.is_strictly_increasing() {
        debug!("{}: x values are not strictly increasing", path.display());
    }
    Ok(trial)
}

/// Load trial `index` from `{input_dir}/{prefix}_{index}.txt`.
pub fn load_trial(config: &PlotConfig, index: u32) -> Result<Trial, LoadError> {
    let path = config.trial_path(index);
    let file = File::open(&path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => LoadError::MissingInput { path: path.clone() },
        _ => LoadError::Read { path: path.clone(), source },
    })?;
    let trial = parse_trial(index, &path, file)?;
    info!("loaded trial {} from {} ({} points)", index, path.display(), trial.len());
    Ok(trial)
}

/// Load every configured trial in order. The first failure aborts the load.
pub fn load_trials(config: &PlotConfig) -> Result<Vec<Trial>, LoadError> {
    config.trial_indices.iter().map(|&i| load_trial(config, i)).collect()
}
