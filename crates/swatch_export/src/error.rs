use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to serialize theme: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unknown export kind '{0}' (expected css, tailwind-config or json)")]
    UnknownKind(String),
}

pub type Result<T> = std::result::Result<T, ExportError>;
