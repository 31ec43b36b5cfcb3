//! Non-color theme tokens: typography, borders, spacing, shadows and scrolling

use std::fmt;

use serde::{Deserialize, Serialize};
use swatch_color::round_to;

/// Format a number for a style value: at most 4 decimals, no trailing zeros.
pub fn css_number(value: f64) -> String {
    format!("{}", round_to(value, 4))
}

/// A number with a unit; unitless zero stays `0`.
pub fn css_length(value: f64, unit: &str) -> String {
    let value = round_to(value, 4);
    if value == 0.0 {
        "0".to_string()
    } else {
        format!("{value}{unit}")
    }
}

// ============================================================================
// Typography
// ============================================================================

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Typography {
    pub font_sans: String,
    pub font_serif: String,
    pub font_mono: String,
    /// Root font size in px.
    pub base_size: f64,
    pub line_height: f64,
    /// Letter spacing in em.
    pub letter_spacing: f64,
}

impl Default for Typography {
    fn default() -> Self {
        Self {
            font_sans: "Inter, ui-sans-serif, system-ui, sans-serif".to_string(),
            font_serif: "ui-serif, Georgia, Cambria, serif".to_string(),
            font_mono: "JetBrains Mono, ui-monospace, SFMono-Regular, monospace".to_string(),
            base_size: 16.0,
            line_height: 1.5,
            letter_spacing: 0.0,
        }
    }
}

// ============================================================================
// Borders
// ============================================================================

/// Corner radii in rem. Component radii are optional; when absent the
/// component inherits `radius`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Borders {
    pub radius: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub button_radius: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card_radius: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input_radius: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub badge_radius: Option<f64>,
    /// Border width in px.
    pub width: f64,
}

impl Default for Borders {
    fn default() -> Self {
        Self {
            radius: 0.625,
            button_radius: None,
            card_radius: None,
            input_radius: None,
            badge_radius: None,
            width: 1.0,
        }
    }
}

impl Borders {
    /// The radius scale derived from `radius`, as `(suffix, rem)` pairs.
    pub fn scale(&self) -> [(&'static str, f64); 4] {
        [
            ("sm", self.radius - 0.25),
            ("md", self.radius - 0.125),
            ("lg", self.radius),
            ("xl", self.radius + 0.25),
        ]
        .map(|(name, rem)| (name, rem.max(0.0)))
    }
}

// ============================================================================
// Spacing
// ============================================================================

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Spacing {
    /// Base spacing unit in rem; the scale is multiples of it.
    pub base: f64,
}

impl Default for Spacing {
    fn default() -> Self {
        Self { base: 0.25 }
    }
}

impl Spacing {
    /// Scale steps published by the generators.
    pub const STEPS: [u32; 13] = [0, 1, 2, 3, 4, 5, 6, 8, 10, 12, 16, 20, 24];

    pub fn step(&self, step: u32) -> f64 {
        self.base * f64::from(step)
    }
}

// ============================================================================
// Shadows
// ============================================================================

/// Named shadow elevations
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum ShadowElevation {
    Sm,
    Default,
    Md,
    Lg,
    Xl,
    Xxl,
    Inner,
}

impl ShadowElevation {
    pub fn all() -> &'static [ShadowElevation] {
        const ELEVATIONS: [ShadowElevation; 7] = [
            ShadowElevation::Sm,
            ShadowElevation::Default,
            ShadowElevation::Md,
            ShadowElevation::Lg,
            ShadowElevation::Xl,
            ShadowElevation::Xxl,
            ShadowElevation::Inner,
        ];
        &ELEVATIONS
    }

    /// Scale name, `DEFAULT` for the unsuffixed elevation.
    pub fn id(self) -> &'static str {
        match self {
            Self::Sm => "sm",
            Self::Default => "DEFAULT",
            Self::Md => "md",
            Self::Lg => "lg",
            Self::Xl => "xl",
            Self::Xxl => "2xl",
            Self::Inner => "inner",
        }
    }

    pub fn variable(self) -> &'static str {
        match self {
            Self::Sm => "--shadow-sm",
            Self::Default => "--shadow",
            Self::Md => "--shadow-md",
            Self::Lg => "--shadow-lg",
            Self::Xl => "--shadow-xl",
            Self::Xxl => "--shadow-2xl",
            Self::Inner => "--shadow-inner",
        }
    }

    pub fn is_inset(self) -> bool {
        matches!(self, Self::Inner)
    }
}

/// A box shadow definition, lengths in px.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shadow {
    pub offset_x: f64,
    pub offset_y: f64,
    pub blur: f64,
    pub spread: f64,
    /// Any CSS color, usually with alpha.
    pub color: String,
}

impl Shadow {
    pub fn new(
        offset_x: f64,
        offset_y: f64,
        blur: f64,
        spread: f64,
        color: impl Into<String>,
    ) -> Self {
        Self {
            offset_x,
            offset_y,
            blur,
            spread,
            color: color.into(),
        }
    }

    pub fn none() -> Self {
        Self::new(0.0, 0.0, 0.0, 0.0, "transparent")
    }

    pub fn to_css(&self, inset: bool) -> String {
        format!(
            "{}{} {} {} {} {}",
            if inset { "inset " } else { "" },
            css_length(self.offset_x, "px"),
            css_length(self.offset_y, "px"),
            css_length(self.blur, "px"),
            css_length(self.spread, "px"),
            self.color
        )
    }
}

impl Default for Shadow {
    fn default() -> Self {
        Self::none()
    }
}

/// Complete set of shadow elevations
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Shadows {
    pub sm: Shadow,
    pub default: Shadow,
    pub md: Shadow,
    pub lg: Shadow,
    pub xl: Shadow,
    #[serde(rename = "2xl")]
    pub xxl: Shadow,
    pub inner: Shadow,
}

impl Shadows {
    /// Get shadow by elevation
    pub fn get(&self, elevation: ShadowElevation) -> &Shadow {
        match elevation {
            ShadowElevation::Sm => &self.sm,
            ShadowElevation::Default => &self.default,
            ShadowElevation::Md => &self.md,
            ShadowElevation::Lg => &self.lg,
            ShadowElevation::Xl => &self.xl,
            ShadowElevation::Xxl => &self.xxl,
            ShadowElevation::Inner => &self.inner,
        }
    }

    /// Every elevation with its CSS value, in scale order.
    pub fn css_values(&self) -> impl Iterator<Item = (ShadowElevation, String)> + '_ {
        ShadowElevation::all()
            .iter()
            .map(|&elevation| (elevation, self.get(elevation).to_css(elevation.is_inset())))
    }
}

impl Default for Shadows {
    fn default() -> Self {
        Self {
            sm: Shadow::new(0.0, 1.0, 2.0, 0.0, "rgb(0 0 0 / 0.05)"),
            default: Shadow::new(0.0, 1.0, 3.0, 0.0, "rgb(0 0 0 / 0.1)"),
            md: Shadow::new(0.0, 4.0, 6.0, -1.0, "rgb(0 0 0 / 0.1)"),
            lg: Shadow::new(0.0, 10.0, 15.0, -3.0, "rgb(0 0 0 / 0.1)"),
            xl: Shadow::new(0.0, 20.0, 25.0, -5.0, "rgb(0 0 0 / 0.1)"),
            xxl: Shadow::new(0.0, 25.0, 50.0, -12.0, "rgb(0 0 0 / 0.25)"),
            inner: Shadow::new(0.0, 2.0, 4.0, 0.0, "rgb(0 0 0 / 0.05)"),
        }
    }
}

// ============================================================================
// Scrolling
// ============================================================================

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScrollBehavior {
    #[default]
    Auto,
    Smooth,
}

impl fmt::Display for ScrollBehavior {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Auto => "auto",
            Self::Smooth => "smooth",
        })
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ScrollConfig {
    pub behavior: ScrollBehavior,
    /// Hide scrollbars everywhere.
    pub hide: bool,
    /// Scrollbar width in px.
    pub width: f64,
    /// Thumb corner radius in px; unset leaves square corners.
    pub radius: Option<f64>,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            behavior: ScrollBehavior::Auto,
            hide: false,
            width: 8.0,
            radius: Some(4.0),
        }
    }
}
