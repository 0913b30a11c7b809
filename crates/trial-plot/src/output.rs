// File: crates/trial-plot/src/output.rs
// Summary: Output sink: atomic PNG write next to the destination, then the optional preview window.

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use chart_core::{Chart, RenderOptions};
use chart_viewer::{ViewerError, ViewerOptions};
use log::{info, warn};
use tempfile::NamedTempFile;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum OutputError {
    #[error("failed to render chart: {0}")]
    Render(String),
    #[error("failed to write {}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// What happened to the preview step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Presentation {
    Shown,
    Disabled,
    NoDisplay,
}

/// Write `bytes` to `path` through a temp file in the same directory, so the
/// destination is either the previous image or the complete new one.
pub fn write_atomic(path: &Path, bytes: &[u8]) -> Result<(), OutputError> {
    let write_err = |source: io::Error| OutputError::Write { path: path.to_path_buf(), source };
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
        _ => PathBuf::from("."),
    };
    let mut tmp = NamedTempFile::new_in(&dir).map_err(write_err)?;
    tmp.write_all(bytes).map_err(write_err)?;
    tmp.as_file().sync_all().map_err(write_err)?;
    tmp.persist(path).map_err(|e| write_err(e.error))?;
    Ok(())
}

/// Render `chart` and store it as a PNG at `path`. Returns the byte count.
pub fn save_png(chart: &Chart, opts: &RenderOptions, path: &Path) -> Result<usize, OutputError> {
    let bytes = chart
        .render_to_png_bytes(opts)
        .map_err(|e| OutputError::Render(format!("{e:#}")))?;
    write_atomic(path, &bytes)?;
    info!("wrote {} ({} bytes)", path.display(), bytes.len());
    Ok(bytes.len())
}

/// Open the blocking preview window unless disabled or impossible.
pub fn present(chart: &Chart, opts: &RenderOptions, show: bool) -> Result<Presentation, ViewerError> {
    if !show {
        info!("preview disabled; skipping viewer");
        return Ok(Presentation::Disabled);
    }
    let title = chart.title.clone().unwrap_or_else(|| "chart".to_string());
    match chart_viewer::present(chart, &ViewerOptions::new(title, opts.clone())) {
        Ok(()) => Ok(Presentation::Shown),
        Err(ViewerError::NoDisplay) => {
            warn!("no display available; image saved without preview");
            Ok(Presentation::NoDisplay)
        }
        Err(e) => Err(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn atomic_write_replaces_existing_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("out.png");
        std::fs::write(&path, b"old").expect("seed");
        write_atomic(&path, b"new contents").expect("write");
        assert_eq!(std::fs::read(&path).expect("read"), b"new contents");
        // no stray temp files left behind
        assert_eq!(std::fs::read_dir(dir.path()).expect("ls").count(), 1);
    }

    #[test]
    fn missing_directory_is_a_write_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("nope").join("out.png");
        let err = write_atomic(&path, b"x").unwrap_err();
        assert!(matches!(err, OutputError::Write { .. }));
        assert!(err.to_string().contains("out.png"));
    }

    #[test]
    fn disabled_preview_returns_immediately() {
        let chart = Chart::new();
        let res = present(&chart, &RenderOptions::default(), false).expect("present");
        assert_eq!(res, Presentation::Disabled);
    }
}
