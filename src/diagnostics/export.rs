// SPDX-License-Identifier: MPL-2.0
//! Writing diagnostic reports to disk.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use chrono::Local;

use crate::app::paths;

/// Errors that can occur during diagnostic report export.
#[derive(Debug)]
pub enum ExportError {
    /// I/O error during file operations.
    Io(io::Error),
    /// JSON serialization error.
    Serialization(serde_json::Error),
    /// No directory could be resolved for the report.
    NoDirectory,
}

impl std::fmt::Display for ExportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "I/O error: {err}"),
            Self::Serialization(err) => write!(f, "serialization error: {err}"),
            Self::NoDirectory => write!(f, "no directory available for the report"),
        }
    }
}

impl std::error::Error for ExportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Serialization(err) => Some(err),
            Self::NoDirectory => None,
        }
    }
}

impl From<io::Error> for ExportError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<serde_json::Error> for ExportError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err)
    }
}

/// Generates a default filename for diagnostic reports.
///
/// Format: `iced_toasts_diagnostics_YYYYMMDD_HHMMSS.json`, local time.
#[must_use]
pub fn generate_default_filename() -> String {
    let now = Local::now();
    format!(
        "iced_toasts_diagnostics_{}.json",
        now.format("%Y%m%d_%H%M%S")
    )
}

/// Writes `content` next to `path` and renames it into place.
///
/// # Errors
///
/// Returns the I/O error of the write or the rename; the temporary file is
/// removed when the rename fails.
pub fn write_atomic(path: &Path, content: &str) -> io::Result<()> {
    let temp_path = path.with_extension("json.tmp");

    fs::write(&temp_path, content)?;

    if let Err(e) = fs::rename(&temp_path, path) {
        let _ = fs::remove_file(&temp_path);
        return Err(e);
    }

    Ok(())
}

/// Returns the directory reports are written to: `<data dir>/diagnostics`.
#[must_use]
pub fn default_export_directory() -> Option<PathBuf> {
    paths::get_app_data_dir().map(|mut path| {
        path.push("diagnostics");
        path
    })
}
