use std::path::PathBuf;

use thiserror::Error;

/// Failures loading or saving a theme record.
#[derive(Debug, Error)]
pub enum ThemeError {
    #[error("invalid theme record: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, ThemeError>;
