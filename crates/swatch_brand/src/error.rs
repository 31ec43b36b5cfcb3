use thiserror::Error;

use crate::LogoType;

/// Failures reported while ingesting or editing a logo.
///
/// None of these leave a partially built or partially edited logo behind.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum BrandError {
    /// The upload is not SVG markup.
    #[error("Only vector files are accepted")]
    NotVector { file_name: String },

    /// The upload looked like SVG but could not be parsed.
    #[error("could not read vector markup: {reason}")]
    Unreadable { reason: String },

    /// A dark-mode override does not fit the logo's shape.
    #[error(
        "a {logo_type} logo must be close to {expected:.2}:1, this file is {actual:.2}:1"
    )]
    AspectRatio {
        logo_type: LogoType,
        expected: f64,
        actual: f64,
    },

    /// A recolor source or target is not a usable color literal.
    #[error("'{0}' is not a color literal")]
    InvalidColor(String),

    #[error("logo '{0}' has no dark-mode version")]
    NoDarkModeVersion(String),

    #[error("logo '{0}' not found")]
    LogoNotFound(String),
}

pub type Result<T> = std::result::Result<T, BrandError>;
