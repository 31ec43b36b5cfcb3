//! Output format selection for exported colors

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// How a color is written into generated artifacts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorFormat {
    /// `oklch(L C H)`, the lossless form.
    #[default]
    Oklch,
    /// `#rrggbb`.
    Hex,
    /// `rgb(r, g, b)`.
    Rgb,
}

impl ColorFormat {
    /// Stable id for config files and command lines.
    pub fn id(self) -> &'static str {
        match self {
            Self::Oklch => "oklch",
            Self::Hex => "hex",
            Self::Rgb => "rgb",
        }
    }

    pub fn all() -> &'static [ColorFormat] {
        const FORMATS: [ColorFormat; 3] = [ColorFormat::Oklch, ColorFormat::Hex, ColorFormat::Rgb];
        &FORMATS
    }
}

impl fmt::Display for ColorFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Unrecognized color format id.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown color format '{0}' (expected oklch, hex or rgb)")]
pub struct ParseFormatError(pub String);

impl FromStr for ColorFormat {
    type Err = ParseFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|format| format.id().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseFormatError(s.to_string()))
    }
}
