//! The theme aggregate root

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use swatch_brand::BrandAssets;
use swatch_color::{ColorScheme, ColorToken};
use tracing::debug;

use crate::colors::ThemeColors;
use crate::error::{Result, ThemeError};
use crate::presets::ThemePreset;
use crate::roles::ColorRole;
use crate::tokens::{Borders, ScrollConfig, Shadows, Spacing, Typography};

/// A complete theme: colors for both display modes plus every other token
/// group and the brand assets.
///
/// Every field has a default, so a record missing whole sections still
/// loads.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeData {
    #[serde(default)]
    pub light_colors: ThemeColors,
    #[serde(default)]
    pub dark_colors: ThemeColors,
    #[serde(default)]
    pub typography: Typography,
    #[serde(default)]
    pub borders: Borders,
    #[serde(default)]
    pub spacing: Spacing,
    #[serde(default)]
    pub shadows: Shadows,
    #[serde(default)]
    pub scroll: ScrollConfig,
    #[serde(default)]
    pub brand: BrandAssets,
}

impl Default for ThemeData {
    fn default() -> Self {
        ThemePreset::default().theme()
    }
}

impl ThemeData {
    /// A theme with token defaults and no colors at all.
    pub fn empty() -> Self {
        Self {
            light_colors: ThemeColors::new(),
            dark_colors: ThemeColors::new(),
            typography: Typography::default(),
            borders: Borders::default(),
            spacing: Spacing::default(),
            shadows: Shadows::default(),
            scroll: ScrollConfig::default(),
            brand: BrandAssets::default(),
        }
    }

    pub fn colors(&self, scheme: ColorScheme) -> &ThemeColors {
        match scheme {
            ColorScheme::Light => &self.light_colors,
            ColorScheme::Dark => &self.dark_colors,
        }
    }

    pub fn colors_mut(&mut self, scheme: ColorScheme) -> &mut ThemeColors {
        match scheme {
            ColorScheme::Light => &mut self.light_colors,
            ColorScheme::Dark => &mut self.dark_colors,
        }
    }

    pub fn primary(&self, scheme: ColorScheme) -> Option<&ColorToken> {
        self.colors(scheme).get(ColorRole::Primary)
    }

    /// Set one role's color in one mode.
    ///
    /// A primary-color change is forwarded to the brand assets so linked logos
    /// in that mode follow it. Returns how many logos were re-derived.
    pub fn set_color(&mut self, scheme: ColorScheme, role: ColorRole, token: ColorToken) -> usize {
        let primary = (role == ColorRole::Primary).then(|| token.hex.clone());
        self.colors_mut(scheme).set(role, token);
        match primary {
            Some(hex) => self.brand.on_primary_changed(scheme, &hex),
            None => 0,
        }
    }

    /// Parse a stored record and re-derive brand variants from their markup.
    pub fn from_json(json: &str) -> Result<Self> {
        let mut theme: ThemeData = serde_json::from_str(json)?;
        theme.brand.refresh();
        Ok(theme)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path).map_err(|source| ThemeError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let theme = Self::from_json(&json)?;
        debug!(path = %path.display(), logos = theme.brand.len(), "loaded theme");
        Ok(theme)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let json = self.to_json()?;
        fs::write(path, json).map_err(|source| ThemeError::Io {
            path: path.to_path_buf(),
            source,
        })
    }
}
