//! Persistent storage
//!
//! Only application settings are written to disk. Conversations live for the
//! lifetime of the process.

pub mod settings;

use std::path::PathBuf;

use directories::ProjectDirs;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Could not determine a data directory for this platform")]
    NoDataDir,
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Platform data directory, e.g. `~/.local/share/udupi-guide` on Linux
pub fn get_data_dir() -> Result<PathBuf, StorageError> {
    ProjectDirs::from("in", "udupi", "udupi-guide")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or(StorageError::NoDataDir)
}
