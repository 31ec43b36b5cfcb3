//! Swatch Theme Code Generator
//!
//! Read-only serialization of a [`ThemeData`] into one of three artifacts:
//!
//! - [`ExportKind::Css`]: a `:root` variable block (and `.dark` block)
//! - [`ExportKind::TailwindConfig`]: a tailwind config module referencing those variables
//! - [`ExportKind::Json`]: the theme record itself
//!
//! Output depends only on the theme and the options, so exporting the same
//! theme twice yields byte-identical text.

pub mod css;
pub mod error;
pub mod json;
pub mod tailwind;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use swatch_color::ColorFormat;
use swatch_theme::ThemeData;
use tracing::debug;

pub use css::generate_css;
pub use error::{ExportError, Result};
pub use json::generate_json;
pub use tailwind::{flatten_palette, generate_tailwind_config};

/// Artifact to produce
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ExportKind {
    #[default]
    Css,
    TailwindConfig,
    Json,
}

impl ExportKind {
    pub fn id(self) -> &'static str {
        match self {
            Self::Css => "css",
            Self::TailwindConfig => "tailwind-config",
            Self::Json => "json",
        }
    }

    pub fn all() -> &'static [ExportKind] {
        const KINDS: [ExportKind; 3] = [
            ExportKind::Css,
            ExportKind::TailwindConfig,
            ExportKind::Json,
        ];
        &KINDS
    }

    /// Conventional file name for the artifact.
    pub fn file_name(self) -> &'static str {
        match self {
            Self::Css => "theme.css",
            Self::TailwindConfig => "tailwind.config.js",
            Self::Json => "theme.json",
        }
    }
}

impl fmt::Display for ExportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for ExportKind {
    type Err = ExportError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|kind| kind.id().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ExportError::UnknownKind(s.to_string()))
    }
}

/// Everything besides the theme that shapes an export.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    pub kind: ExportKind,
    /// Color notation; only the CSS artifact uses it.
    pub format: ColorFormat,
    /// Emit the dark-mode block in the CSS artifact.
    pub include_dark: bool,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            kind: ExportKind::Css,
            format: ColorFormat::Oklch,
            include_dark: true,
        }
    }
}

/// Produce one artifact.
pub fn export(theme: &ThemeData, options: &ExportOptions) -> Result<String> {
    let text = match options.kind {
        ExportKind::Css => generate_css(theme, options.format, options.include_dark),
        ExportKind::TailwindConfig => generate_tailwind_config(theme),
        ExportKind::Json => generate_json(theme)?,
    };
    debug!(kind = %options.kind, format = %options.format, bytes = text.len(), "exported theme");
    Ok(text)
}
