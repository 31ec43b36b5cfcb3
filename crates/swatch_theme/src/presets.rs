//! Built-in theme presets inspired by shadcn base color presets.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use swatch_color::{ColorScheme, ColorToken, Rgb};
use thiserror::Error;

use crate::colors::ThemeColors;
use crate::roles::ColorRole;
use crate::theme::ThemeData;

/// Built-in theme preset catalog.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ThemePreset {
    /// Pure grays.
    #[default]
    Neutral,
    /// Blue-tinted grays.
    Slate,
    /// Violet-tinted grays.
    Zinc,
}

impl ThemePreset {
    /// Stable preset id for config/serialization.
    pub fn id(self) -> &'static str {
        match self {
            Self::Neutral => "neutral",
            Self::Slate => "slate",
            Self::Zinc => "zinc",
        }
    }

    /// User-facing display name.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Neutral => "Neutral",
            Self::Slate => "Slate",
            Self::Zinc => "Zinc",
        }
    }

    /// Full preset list.
    pub fn all() -> &'static [ThemePreset] {
        const PRESETS: [ThemePreset; 3] =
            [ThemePreset::Neutral, ThemePreset::Slate, ThemePreset::Zinc];
        &PRESETS
    }

    /// Build a complete theme for this preset.
    pub fn theme(self) -> ThemeData {
        let (light, dark) = match self {
            Self::Neutral => (neutral_light(), neutral_dark()),
            Self::Slate => (slate_light(), slate_dark()),
            Self::Zinc => (zinc_light(), zinc_dark()),
        };
        ThemeData {
            light_colors: build_colors(light, ColorScheme::Light),
            dark_colors: build_colors(dark, ColorScheme::Dark),
            ..ThemeData::empty()
        }
    }
}

impl Display for ThemePreset {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown preset '{0}' (expected neutral, slate or zinc)")]
pub struct ParsePresetError(pub String);

impl FromStr for ThemePreset {
    type Err = ParsePresetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|preset| preset.id().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParsePresetError(s.to_string()))
    }
}

#[derive(Clone, Copy)]
struct BasePalette {
    background: u32,
    foreground: u32,
    card: u32,
    primary: u32,
    primary_foreground: u32,
    secondary: u32,
    muted: u32,
    muted_foreground: u32,
    accent: u32,
    destructive: u32,
    border: u32,
    ring: u32,
}

fn build_colors(base: BasePalette, scheme: ColorScheme) -> ThemeColors {
    let charts: [u32; 5] = match scheme {
        ColorScheme::Light => [0xE76E50, 0x2A9D90, 0x274754, 0xE8C468, 0xF4A462],
        ColorScheme::Dark => [0x2662D9, 0x2EB88A, 0xE88C30, 0xAF57DB, 0xE23670],
    };
    let on_destructive = 0xFAFAFA;
    let scrollbar_thumb = blend(
        Rgb::from_u32(base.border),
        Rgb::from_u32(base.muted_foreground),
        0.5,
    );

    let entries = [
        (ColorRole::Background, base.background),
        (ColorRole::Foreground, base.foreground),
        (ColorRole::Card, base.card),
        (ColorRole::CardForeground, base.foreground),
        (ColorRole::Popover, base.card),
        (ColorRole::PopoverForeground, base.foreground),
        (ColorRole::Primary, base.primary),
        (ColorRole::PrimaryForeground, base.primary_foreground),
        (ColorRole::Secondary, base.secondary),
        (ColorRole::SecondaryForeground, base.foreground),
        (ColorRole::Muted, base.muted),
        (ColorRole::MutedForeground, base.muted_foreground),
        (ColorRole::Accent, base.accent),
        (ColorRole::AccentForeground, base.foreground),
        (ColorRole::Destructive, base.destructive),
        (ColorRole::DestructiveForeground, on_destructive),
        (ColorRole::Border, base.border),
        (ColorRole::Input, base.border),
        (ColorRole::Ring, base.ring),
        (ColorRole::Chart1, charts[0]),
        (ColorRole::Chart2, charts[1]),
        (ColorRole::Chart3, charts[2]),
        (ColorRole::Chart4, charts[3]),
        (ColorRole::Chart5, charts[4]),
        (ColorRole::Sidebar, base.card),
        (ColorRole::SidebarForeground, base.foreground),
        (ColorRole::SidebarPrimary, base.primary),
        (ColorRole::SidebarPrimaryForeground, base.primary_foreground),
        (ColorRole::SidebarAccent, base.accent),
        (ColorRole::SidebarAccentForeground, base.foreground),
        (ColorRole::SidebarBorder, base.border),
        (ColorRole::SidebarRing, base.ring),
        (ColorRole::ScrollbarTrack, base.muted),
    ];

    entries
        .into_iter()
        .map(|(role, hex)| (role, Rgb::from_u32(hex)))
        .chain(std::iter::once((ColorRole::ScrollbarThumb, scrollbar_thumb)))
        .map(|(role, rgb)| (role, ColorToken::from_rgb(role.key(), rgb)))
        .collect()
}

fn blend(a: Rgb, b: Rgb, t: f64) -> Rgb {
    let mix = |x: u8, y: u8| (f64::from(x) + (f64::from(y) - f64::from(x)) * t).round() as u8;
    Rgb::new(mix(a.r, b.r), mix(a.g, b.g), mix(a.b, b.b))
}

fn neutral_light() -> BasePalette {
    BasePalette {
        background: 0xFFFFFF,
        foreground: 0x0A0A0A,
        card: 0xFFFFFF,
        primary: 0x171717,
        primary_foreground: 0xFAFAFA,
        secondary: 0xF5F5F5,
        muted: 0xF5F5F5,
        muted_foreground: 0x737373,
        accent: 0xF5F5F5,
        destructive: 0xEF4444,
        border: 0xE5E5E5,
        ring: 0x0A0A0A,
    }
}

fn neutral_dark() -> BasePalette {
    BasePalette {
        background: 0x0A0A0A,
        foreground: 0xFAFAFA,
        card: 0x0A0A0A,
        primary: 0xFAFAFA,
        primary_foreground: 0x171717,
        secondary: 0x262626,
        muted: 0x262626,
        muted_foreground: 0xA3A3A3,
        accent: 0x262626,
        destructive: 0x7F1D1D,
        border: 0x262626,
        ring: 0xD4D4D4,
    }
}

fn slate_light() -> BasePalette {
    BasePalette {
        background: 0xFFFFFF,
        foreground: 0x020817,
        card: 0xFFFFFF,
        primary: 0x0F172A,
        primary_foreground: 0xF8FAFC,
        secondary: 0xF1F5F9,
        muted: 0xF1F5F9,
        muted_foreground: 0x64748B,
        accent: 0xF1F5F9,
        destructive: 0xEF4444,
        border: 0xE2E8F0,
        ring: 0x020817,
    }
}

fn slate_dark() -> BasePalette {
    BasePalette {
        background: 0x020817,
        foreground: 0xF8FAFC,
        card: 0x020817,
        primary: 0xF8FAFC,
        primary_foreground: 0x0F172A,
        secondary: 0x1E293B,
        muted: 0x1E293B,
        muted_foreground: 0x94A3B8,
        accent: 0x1E293B,
        destructive: 0x7F1D1D,
        border: 0x1E293B,
        ring: 0xCBD5E1,
    }
}

fn zinc_light() -> BasePalette {
    BasePalette {
        background: 0xFFFFFF,
        foreground: 0x09090B,
        card: 0xFFFFFF,
        primary: 0x18181B,
        primary_foreground: 0xFAFAFA,
        secondary: 0xF4F4F5,
        muted: 0xF4F4F5,
        muted_foreground: 0x71717A,
        accent: 0xF4F4F5,
        destructive: 0xEF4444,
        border: 0xE4E4E7,
        ring: 0x09090B,
    }
}

fn zinc_dark() -> BasePalette {
    BasePalette {
        background: 0x09090B,
        foreground: 0xFAFAFA,
        card: 0x09090B,
        primary: 0xFAFAFA,
        primary_foreground: 0x18181B,
        secondary: 0x27272A,
        muted: 0x27272A,
        muted_foreground: 0xA1A1AA,
        accent: 0x27272A,
        destructive: 0x7F1D1D,
        border: 0x27272A,
        ring: 0xD4D4D8,
    }
}
