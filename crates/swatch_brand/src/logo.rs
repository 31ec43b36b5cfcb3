//! Logo records with per-mode mono-color configuration

use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use rustc_hash::FxHasher;
use serde::{Deserialize, Serialize};
use swatch_color::ColorScheme;
use thiserror::Error;
use tracing::debug;

use crate::error::{BrandError, Result};
use crate::literal::{detect_colors_from_svg, replace_color_in_svg};
use crate::upload::{check_aspect_ratio, validate_vector, SvgUpload};
use crate::variants::{generate_color_variants, ColorVariants};

/// Layout slot a logo is designed for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogoType {
    /// Square mark, 1:1.
    Icon,
    /// Wordmark beside the mark, 3:1.
    Horizontal,
    /// Mark above the wordmark, 2:3.
    Vertical,
}

impl LogoType {
    /// Target width over height.
    pub fn aspect_ratio(self) -> f64 {
        match self {
            Self::Icon => 1.0,
            Self::Horizontal => 3.0,
            Self::Vertical => 2.0 / 3.0,
        }
    }

    pub fn id(self) -> &'static str {
        match self {
            Self::Icon => "icon",
            Self::Horizontal => "horizontal",
            Self::Vertical => "vertical",
        }
    }
}

impl fmt::Display for LogoType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown logo type '{0}' (expected icon, horizontal or vertical)")]
pub struct ParseLogoTypeError(pub String);

impl FromStr for LogoType {
    type Err = ParseLogoTypeError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        [Self::Icon, Self::Horizontal, Self::Vertical]
            .into_iter()
            .find(|logo_type| logo_type.id().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseLogoTypeError(s.to_string()))
    }
}

/// Where a mode's mono color comes from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MonoColor {
    /// Follows the theme's primary color; holds the last value applied.
    Linked(String),
    /// Set by hand; stays until explicitly re-linked.
    Custom(String),
}

impl MonoColor {
    pub fn color(&self) -> &str {
        match self {
            Self::Linked(color) | Self::Custom(color) => color,
        }
    }

    pub fn is_linked(&self) -> bool {
        matches!(self, Self::Linked(_))
    }
}

/// Mono-color state and derived variants for one display mode.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "LogoModeRecord", into = "LogoModeRecord")]
pub struct LogoModeConfig {
    mono: MonoColor,
    variants: ColorVariants,
}

/// Persisted shape of [`LogoModeConfig`].
#[derive(Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct LogoModeRecord {
    mono_color: String,
    is_linked_to_primary: bool,
    #[serde(default)]
    variants: ColorVariants,
}

impl From<LogoModeRecord> for LogoModeConfig {
    fn from(record: LogoModeRecord) -> Self {
        let mono = if record.is_linked_to_primary {
            MonoColor::Linked(record.mono_color)
        } else {
            MonoColor::Custom(record.mono_color)
        };
        Self {
            mono,
            variants: record.variants,
        }
    }
}

impl From<LogoModeConfig> for LogoModeRecord {
    fn from(config: LogoModeConfig) -> Self {
        let is_linked_to_primary = config.mono.is_linked();
        let mono_color = match config.mono {
            MonoColor::Linked(color) | MonoColor::Custom(color) => color,
        };
        Self {
            mono_color,
            is_linked_to_primary,
            variants: config.variants,
        }
    }
}

impl LogoModeConfig {
    /// Derive a mode configuration for `markup`.
    pub fn derive(
        markup: &str,
        detected_colors: &[String],
        mono: MonoColor,
        scheme: ColorScheme,
    ) -> Self {
        let variants = generate_color_variants(markup, detected_colors, mono.color(), scheme);
        Self { mono, variants }
    }

    pub fn mono(&self) -> &MonoColor {
        &self.mono
    }

    pub fn mono_color(&self) -> &str {
        self.mono.color()
    }

    pub fn is_linked_to_primary(&self) -> bool {
        self.mono.is_linked()
    }

    pub fn variants(&self) -> &ColorVariants {
        &self.variants
    }
}

/// A separately uploaded asset shown in dark mode instead of the base markup.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DarkModeVersion {
    svg_content: String,
    detected_colors: Vec<String>,
    variants: ColorVariants,
}

impl DarkModeVersion {
    fn derive(svg_content: String, mono: &MonoColor) -> Self {
        let detected_colors = detect_colors_from_svg(&svg_content);
        let variants = generate_color_variants(
            &svg_content,
            &detected_colors,
            mono.color(),
            ColorScheme::Dark,
        );
        Self {
            svg_content,
            detected_colors,
            variants,
        }
    }

    pub fn svg_content(&self) -> &str {
        &self.svg_content
    }

    pub fn detected_colors(&self) -> &[String] {
        &self.detected_colors
    }

    pub fn variants(&self) -> &ColorVariants {
        &self.variants
    }
}

/// One uploaded brand asset.
///
/// `light_mode.variants().original` always equals `svg_content`, and so does
/// the dark mode's unless a [`DarkModeVersion`] is present, in which case that
/// version carries its own variant set. Every mutation replaces variant sets
/// wholesale, so a clone taken earlier remains a consistent snapshot.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogoVariant {
    id: String,
    name: String,
    #[serde(rename = "type")]
    logo_type: LogoType,
    svg_content: String,
    detected_colors: Vec<String>,
    light_mode: LogoModeConfig,
    dark_mode: LogoModeConfig,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    dark_mode_version: Option<DarkModeVersion>,
}

impl LogoVariant {
    /// Validate an upload and build a logo whose modes both follow `primary`.
    ///
    /// Nothing is created when validation fails.
    pub fn from_upload(upload: &SvgUpload, logo_type: LogoType, primary: &str) -> Result<Self> {
        let svg_content = validate_vector(upload)?;
        let name = upload.stem();
        let id = logo_id(&name, &svg_content);
        Ok(Self::from_markup(id, name, logo_type, svg_content, primary))
    }

    /// Build from markup that has already been validated.
    pub fn from_markup(
        id: impl Into<String>,
        name: impl Into<String>,
        logo_type: LogoType,
        svg_content: String,
        primary: &str,
    ) -> Self {
        let detected_colors = detect_colors_from_svg(&svg_content);
        let light_mode = LogoModeConfig::derive(
            &svg_content,
            &detected_colors,
            MonoColor::Linked(primary.to_string()),
            ColorScheme::Light,
        );
        let dark_mode = LogoModeConfig::derive(
            &svg_content,
            &detected_colors,
            MonoColor::Linked(primary.to_string()),
            ColorScheme::Dark,
        );
        let logo = Self {
            id: id.into(),
            name: name.into(),
            logo_type,
            svg_content,
            detected_colors,
            light_mode,
            dark_mode,
            dark_mode_version: None,
        };
        debug!(id = %logo.id, colors = ?logo.detected_colors, "created logo");
        logo
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub(crate) fn set_id(&mut self, id: String) {
        self.id = id;
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn rename(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn logo_type(&self) -> LogoType {
        self.logo_type
    }

    pub fn svg_content(&self) -> &str {
        &self.svg_content
    }

    pub fn detected_colors(&self) -> &[String] {
        &self.detected_colors
    }

    pub fn light_mode(&self) -> &LogoModeConfig {
        &self.light_mode
    }

    pub fn dark_mode(&self) -> &LogoModeConfig {
        &self.dark_mode
    }

    pub fn dark_mode_version(&self) -> Option<&DarkModeVersion> {
        self.dark_mode_version.as_ref()
    }

    pub fn mode_config(&self, scheme: ColorScheme) -> &LogoModeConfig {
        match scheme {
            ColorScheme::Light => &self.light_mode,
            ColorScheme::Dark => &self.dark_mode,
        }
    }

    /// Markup rendered in `scheme`: the dark-mode version when one exists and
    /// the scheme is dark, the base markup otherwise.
    pub fn current_svg(&self, scheme: ColorScheme) -> &str {
        match (&self.dark_mode_version, scheme) {
            (Some(version), ColorScheme::Dark) => &version.svg_content,
            _ => &self.svg_content,
        }
    }

    /// Variants rendered in `scheme`, following the same rule as
    /// [`current_svg`](Self::current_svg).
    pub fn current_variants(&self, scheme: ColorScheme) -> &ColorVariants {
        match (&self.dark_mode_version, scheme) {
            (Some(version), ColorScheme::Dark) => &version.variants,
            _ => &self.mode_config(scheme).variants,
        }
    }

    /// Replace the configuration of the active mode only.
    ///
    /// The other mode's configuration is left exactly as it was.
    pub fn update_current_mode_config(&mut self, scheme: ColorScheme, mono: MonoColor) {
        let config = LogoModeConfig::derive(&self.svg_content, &self.detected_colors, mono, scheme);
        match scheme {
            ColorScheme::Light => self.light_mode = config,
            ColorScheme::Dark => {
                if let Some(version) = self.dark_mode_version.take() {
                    self.dark_mode_version =
                        Some(DarkModeVersion::derive(version.svg_content, &config.mono));
                }
                self.dark_mode = config;
            }
        }
        debug!(id = %self.id, %scheme, "re-derived mode variants");
    }

    /// A hand-picked mono color; detaches the mode from the primary color.
    pub fn set_mono_color(&mut self, scheme: ColorScheme, color: impl Into<String>) {
        self.update_current_mode_config(scheme, MonoColor::Custom(color.into()));
    }

    /// Attach the mode to the primary color again.
    pub fn relink_to_primary(&mut self, scheme: ColorScheme, primary: &str) {
        self.update_current_mode_config(scheme, MonoColor::Linked(primary.to_string()));
    }

    /// Follow a primary-color change in `scheme` if that mode is linked.
    ///
    /// Returns whether the mode was re-derived.
    pub fn track_primary(&mut self, scheme: ColorScheme, primary: &str) -> bool {
        let config = self.mode_config(scheme);
        if !config.is_linked_to_primary() || config.mono_color() == primary {
            return false;
        }
        self.relink_to_primary(scheme, primary);
        true
    }

    /// Substitute one color in the base markup and re-derive both modes.
    pub fn replace_color(&mut self, target: &str, replacement: &str) -> Result<()> {
        let svg_content = replace_color_in_svg(&self.svg_content, target, replacement)?;
        let detected_colors = detect_colors_from_svg(&svg_content);

        self.light_mode = LogoModeConfig::derive(
            &svg_content,
            &detected_colors,
            self.light_mode.mono.clone(),
            ColorScheme::Light,
        );
        self.dark_mode = LogoModeConfig::derive(
            &svg_content,
            &detected_colors,
            self.dark_mode.mono.clone(),
            ColorScheme::Dark,
        );
        self.svg_content = svg_content;
        self.detected_colors = detected_colors;
        debug!(id = %self.id, target, replacement, "replaced logo color");
        Ok(())
    }

    /// Substitute one color in the dark-mode version only.
    pub fn replace_dark_version_color(&mut self, target: &str, replacement: &str) -> Result<()> {
        let version = self
            .dark_mode_version
            .as_ref()
            .ok_or_else(|| BrandError::NoDarkModeVersion(self.id.clone()))?;
        let svg_content = replace_color_in_svg(&version.svg_content, target, replacement)?;
        self.dark_mode_version = Some(DarkModeVersion::derive(svg_content, &self.dark_mode.mono));
        debug!(id = %self.id, target, replacement, "replaced dark-mode version color");
        Ok(())
    }

    /// Attach a dark-mode-only asset, replacing any previous one.
    ///
    /// The upload must be vector markup shaped like this logo's type; on
    /// failure the logo is unchanged.
    pub fn set_dark_mode_version(&mut self, upload: &SvgUpload, tolerance: f64) -> Result<()> {
        let svg_content = validate_vector(upload)?;
        check_aspect_ratio(&svg_content, self.logo_type, tolerance)?;
        self.dark_mode_version = Some(DarkModeVersion::derive(svg_content, &self.dark_mode.mono));
        debug!(id = %self.id, "attached dark-mode version");
        Ok(())
    }

    /// Detach the dark-mode-only asset. The base markup and its variants are
    /// not touched.
    pub fn remove_dark_mode_version(&mut self) -> Option<DarkModeVersion> {
        self.dark_mode_version.take()
    }

    /// Re-derive every variant set from the source markup, for records
    /// loaded from storage.
    pub fn refresh_variants(&mut self) {
        self.detected_colors = detect_colors_from_svg(&self.svg_content);
        self.light_mode = LogoModeConfig::derive(
            &self.svg_content,
            &self.detected_colors,
            self.light_mode.mono.clone(),
            ColorScheme::Light,
        );
        self.dark_mode = LogoModeConfig::derive(
            &self.svg_content,
            &self.detected_colors,
            self.dark_mode.mono.clone(),
            ColorScheme::Dark,
        );
        if let Some(version) = self.dark_mode_version.take() {
            self.dark_mode_version =
                Some(DarkModeVersion::derive(version.svg_content, &self.dark_mode.mono));
        }
    }
}

/// Stable id from the logo's name and markup.
fn logo_id(name: &str, svg_content: &str) -> String {
    let mut hasher = FxHasher::default();
    name.hash(&mut hasher);
    svg_content.hash(&mut hasher);
    format!("logo-{:016x}", hasher.finish())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logo_type_parses_ids() {
        assert_eq!("Vertical".parse::<LogoType>().unwrap(), LogoType::Vertical);
        assert_eq!(
            "banner".parse::<LogoType>(),
            Err(ParseLogoTypeError("banner".to_string()))
        );
    }

    const SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" width="10" height="10"><rect width="10" height="10" fill="#ff0000"/><circle r="2" fill="#0000ff"/></svg>"##;

    fn logo() -> LogoVariant {
        LogoVariant::from_markup("logo-1", "Acme", LogoType::Icon, SVG.to_string(), "#336699")
    }

    #[test]
    fn test_new_logo_is_linked_in_both_modes() {
        let logo = logo();
        assert!(logo.light_mode().is_linked_to_primary());
        assert!(logo.dark_mode().is_linked_to_primary());
        assert_eq!(logo.light_mode().mono_color(), "#336699");
        assert_eq!(logo.light_mode().variants().original, logo.svg_content());
        assert_eq!(logo.dark_mode().variants().original, logo.svg_content());
        assert_eq!(logo.detected_colors(), ["#ff0000", "#0000ff"]);
    }

    #[test]
    fn test_dark_update_leaves_light_untouched() {
        let mut logo = logo();
        let light_before = logo.light_mode().clone();

        logo.set_mono_color(ColorScheme::Dark, "#eeeeee");

        assert_eq!(logo.light_mode(), &light_before);
        assert!(!logo.dark_mode().is_linked_to_primary());
        assert_eq!(logo.dark_mode().mono_color(), "#eeeeee");
    }

    #[test]
    fn test_custom_mono_ignores_primary_until_relinked() {
        let mut logo = logo();
        logo.set_mono_color(ColorScheme::Light, "#111111");

        assert!(!logo.track_primary(ColorScheme::Light, "#999999"));
        assert_eq!(logo.light_mode().mono_color(), "#111111");

        logo.relink_to_primary(ColorScheme::Light, "#999999");
        assert!(logo.light_mode().is_linked_to_primary());
        assert_eq!(logo.light_mode().mono_color(), "#999999");
    }

    #[test]
    fn test_track_primary_only_touches_one_mode() {
        let mut logo = logo();
        let dark_before = logo.dark_mode().clone();

        assert!(logo.track_primary(ColorScheme::Light, "#00aa00"));
        assert!(!logo.track_primary(ColorScheme::Light, "#00aa00"));

        assert_eq!(logo.light_mode().mono_color(), "#00aa00");
        assert_eq!(logo.dark_mode(), &dark_before);
    }

    #[test]
    fn test_replace_color_regenerates_both_modes() {
        let mut logo = logo();
        logo.replace_color("#FF0000", "#00ff00").unwrap();

        assert_eq!(logo.detected_colors(), ["#00ff00", "#0000ff"]);
        assert_eq!(logo.light_mode().variants().original, logo.svg_content());
        assert_eq!(logo.dark_mode().variants().original, logo.svg_content());
        assert!(!logo.svg_content().contains("#ff0000"));
    }

    #[test]
    fn test_failed_replace_changes_nothing() {
        let mut logo = logo();
        let before = logo.clone();
        assert!(logo.replace_color("tomato", "#00ff00").is_err());
        assert_eq!(logo, before);
    }

    #[test]
    fn test_mode_record_round_trip() {
        let logo = logo();
        let json = serde_json::to_value(&logo).unwrap();
        assert_eq!(json["type"], "icon");
        assert_eq!(json["lightMode"]["isLinkedToPrimary"], true);
        assert_eq!(json["lightMode"]["monoColor"], "#336699");
        let back: LogoVariant = serde_json::from_value(json).unwrap();
        assert_eq!(back, logo);
    }

    #[test]
    fn test_logo_id_is_stable() {
        assert_eq!(logo_id("a", "<svg/>"), logo_id("a", "<svg/>"));
        assert_ne!(logo_id("a", "<svg/>"), logo_id("b", "<svg/>"));
    }
}
