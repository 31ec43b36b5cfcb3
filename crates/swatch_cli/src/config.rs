//! Swatch configuration file handling

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use swatch_brand::{LogoType, DEFAULT_ASPECT_TOLERANCE};
use swatch_color::ColorFormat;
use swatch_export::{ExportKind, ExportOptions};

pub const CONFIG_FILE: &str = "swatch.toml";

/// Top-level Swatch configuration (swatch.toml)
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct SwatchConfig {
    #[serde(default)]
    pub theme: ThemeConfig,
    #[serde(default)]
    pub export: ExportConfig,
    #[serde(default)]
    pub brand: BrandConfig,
}

/// Where the theme record lives
#[derive(Debug, Deserialize, Serialize)]
pub struct ThemeConfig {
    /// Theme JSON path (relative to the config file)
    #[serde(default = "default_theme_path")]
    pub path: String,
}

fn default_theme_path() -> String {
    "theme.json".to_string()
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            path: default_theme_path(),
        }
    }
}

/// Export defaults
#[derive(Debug, Deserialize, Serialize)]
pub struct ExportConfig {
    #[serde(default)]
    pub kind: ExportKind,
    #[serde(default)]
    pub format: ColorFormat,
    /// Emit the dark-mode block in CSS output
    #[serde(default = "default_true")]
    pub include_dark: bool,
    /// Write artifacts here instead of stdout
    #[serde(default)]
    pub output_dir: Option<String>,
}

fn default_true() -> bool {
    true
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            kind: ExportKind::default(),
            format: ColorFormat::default(),
            include_dark: true,
            output_dir: None,
        }
    }
}

impl ExportConfig {
    pub fn options(&self) -> ExportOptions {
        ExportOptions {
            kind: self.kind,
            format: self.format,
            include_dark: self.include_dark,
        }
    }
}

/// Brand asset defaults
#[derive(Debug, Deserialize, Serialize)]
pub struct BrandConfig {
    /// Relative tolerance for dark-mode logo aspect ratios
    #[serde(default = "default_aspect_tolerance")]
    pub aspect_tolerance: f64,
    /// Logo type used when `logo add` is not given one
    #[serde(default = "default_logo_type")]
    pub logo_type: LogoType,
}

fn default_aspect_tolerance() -> f64 {
    DEFAULT_ASPECT_TOLERANCE
}

fn default_logo_type() -> LogoType {
    LogoType::Horizontal
}

impl Default for BrandConfig {
    fn default() -> Self {
        Self {
            aspect_tolerance: default_aspect_tolerance(),
            logo_type: default_logo_type(),
        }
    }
}

/// A loaded configuration and the directory it was found in.
#[derive(Debug)]
pub struct LoadedConfig {
    pub config: SwatchConfig,
    pub root: PathBuf,
}

impl LoadedConfig {
    pub fn theme_path(&self) -> PathBuf {
        self.root.join(&self.config.theme.path)
    }

    pub fn output_dir(&self) -> Option<PathBuf> {
        self.config
            .export
            .output_dir
            .as_ref()
            .map(|dir| self.root.join(dir))
    }
}

impl SwatchConfig {
    /// Load configuration from a directory (looks for swatch.toml).
    ///
    /// A missing file yields the defaults.
    pub fn load_from_dir(path: &Path) -> Result<LoadedConfig> {
        let (config_path, root) = if path.is_file() {
            let root = path.parent().map(Path::to_path_buf).unwrap_or_default();
            (path.to_path_buf(), root)
        } else {
            (path.join(CONFIG_FILE), path.to_path_buf())
        };

        if !config_path.exists() {
            tracing::debug!(path = %config_path.display(), "no config file, using defaults");
            return Ok(LoadedConfig {
                config: SwatchConfig::default(),
                root,
            });
        }

        let content = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read {}", config_path.display()))?;

        let config = Self::from_toml(&content)
            .with_context(|| format!("Failed to parse {}", config_path.display()))?;

        Ok(LoadedConfig { config, root })
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Serialize to TOML string
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize config")
    }
}
