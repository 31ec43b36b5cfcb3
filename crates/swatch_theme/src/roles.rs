//! Semantic color roles and the table mapping them to style variables
//!
//! [`ROLE_TABLE`] is the only source of truth for which color variables are
//! ever written, removed or exported. A key present in a [`ThemeColors`] map
//! but absent from the table is never published.
//!
//! [`ThemeColors`]: crate::ThemeColors

use std::fmt;

/// Bumped whenever a role is added to or removed from [`ROLE_TABLE`].
pub const ROLE_TABLE_VERSION: u32 = 1;

/// Semantic color role keys
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum ColorRole {
    // Surfaces
    Background,
    Foreground,
    Card,
    CardForeground,
    Popover,
    PopoverForeground,

    // Actions
    Primary,
    PrimaryForeground,
    Secondary,
    SecondaryForeground,
    Muted,
    MutedForeground,
    Accent,
    AccentForeground,
    Destructive,
    DestructiveForeground,

    // Controls
    Border,
    Input,
    Ring,

    // Data visualization
    Chart1,
    Chart2,
    Chart3,
    Chart4,
    Chart5,

    // Sidebar
    Sidebar,
    SidebarForeground,
    SidebarPrimary,
    SidebarPrimaryForeground,
    SidebarAccent,
    SidebarAccentForeground,
    SidebarBorder,
    SidebarRing,

    // Scrollbar
    ScrollbarTrack,
    ScrollbarThumb,
}

/// One row of the role table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RoleBinding {
    pub role: ColorRole,
    /// Key used in stored theme records.
    pub key: &'static str,
    /// Style variable the role is published as.
    pub variable: &'static str,
}

const fn bind(role: ColorRole, key: &'static str, variable: &'static str) -> RoleBinding {
    RoleBinding { role, key, variable }
}

/// Every published color role, in publication order.
pub const ROLE_TABLE: &[RoleBinding] = &[
    bind(ColorRole::Background, "background", "--background"),
    bind(ColorRole::Foreground, "foreground", "--foreground"),
    bind(ColorRole::Card, "card", "--card"),
    bind(ColorRole::CardForeground, "cardForeground", "--card-foreground"),
    bind(ColorRole::Popover, "popover", "--popover"),
    bind(ColorRole::PopoverForeground, "popoverForeground", "--popover-foreground"),
    bind(ColorRole::Primary, "primary", "--primary"),
    bind(ColorRole::PrimaryForeground, "primaryForeground", "--primary-foreground"),
    bind(ColorRole::Secondary, "secondary", "--secondary"),
    bind(ColorRole::SecondaryForeground, "secondaryForeground", "--secondary-foreground"),
    bind(ColorRole::Muted, "muted", "--muted"),
    bind(ColorRole::MutedForeground, "mutedForeground", "--muted-foreground"),
    bind(ColorRole::Accent, "accent", "--accent"),
    bind(ColorRole::AccentForeground, "accentForeground", "--accent-foreground"),
    bind(ColorRole::Destructive, "destructive", "--destructive"),
    bind(ColorRole::DestructiveForeground, "destructiveForeground", "--destructive-foreground"),
    bind(ColorRole::Border, "border", "--border"),
    bind(ColorRole::Input, "input", "--input"),
    bind(ColorRole::Ring, "ring", "--ring"),
    bind(ColorRole::Chart1, "chart1", "--chart-1"),
    bind(ColorRole::Chart2, "chart2", "--chart-2"),
    bind(ColorRole::Chart3, "chart3", "--chart-3"),
    bind(ColorRole::Chart4, "chart4", "--chart-4"),
    bind(ColorRole::Chart5, "chart5", "--chart-5"),
    bind(ColorRole::Sidebar, "sidebar", "--sidebar"),
    bind(ColorRole::SidebarForeground, "sidebarForeground", "--sidebar-foreground"),
    bind(ColorRole::SidebarPrimary, "sidebarPrimary", "--sidebar-primary"),
    bind(
        ColorRole::SidebarPrimaryForeground,
        "sidebarPrimaryForeground",
        "--sidebar-primary-foreground",
    ),
    bind(ColorRole::SidebarAccent, "sidebarAccent", "--sidebar-accent"),
    bind(
        ColorRole::SidebarAccentForeground,
        "sidebarAccentForeground",
        "--sidebar-accent-foreground",
    ),
    bind(ColorRole::SidebarBorder, "sidebarBorder", "--sidebar-border"),
    bind(ColorRole::SidebarRing, "sidebarRing", "--sidebar-ring"),
    bind(ColorRole::ScrollbarTrack, "scrollbarTrack", "--scrollbar-track"),
    bind(ColorRole::ScrollbarThumb, "scrollbarThumb", "--scrollbar-thumb"),
];

/// Roles covered by the scrollbar-only fast path.
pub const SCROLLBAR_ROLES: [ColorRole; 2] = [ColorRole::ScrollbarTrack, ColorRole::ScrollbarThumb];

impl ColorRole {
    fn binding(self) -> &'static RoleBinding {
        // Every variant has exactly one row; checked by `test_every_role_bound_once`.
        &ROLE_TABLE[self as usize]
    }

    /// Key used in stored theme records, e.g. `cardForeground`.
    pub fn key(self) -> &'static str {
        self.binding().key
    }

    /// Style variable name, e.g. `--card-foreground`.
    pub fn variable(self) -> &'static str {
        self.binding().variable
    }

    pub fn from_key(key: &str) -> Option<Self> {
        ROLE_TABLE
            .iter()
            .find(|binding| binding.key == key)
            .map(|binding| binding.role)
    }

    pub fn all() -> impl Iterator<Item = ColorRole> {
        ROLE_TABLE.iter().map(|binding| binding.role)
    }
}

impl fmt::Display for ColorRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Convert a camel-case role key to kebab case.
///
/// Uppercase letters and the start of a digit run begin a new word:
/// `sidebarPrimaryForeground` becomes `sidebar-primary-foreground` and
/// `chart1` becomes `chart-1`.
pub fn kebab_case(key: &str) -> String {
    let mut out = String::with_capacity(key.len() + 4);
    let mut prev: Option<char> = None;
    for ch in key.chars() {
        let boundary = match prev {
            Some(p) if ch.is_ascii_uppercase() => p != '-',
            Some(p) if ch.is_ascii_digit() => !p.is_ascii_digit() && p != '-',
            _ => false,
        };
        if boundary {
            out.push('-');
        }
        out.push(ch.to_ascii_lowercase());
        prev = Some(ch);
    }
    out
}

/// Variable name for an arbitrary camel-case key.
pub fn variable_name(key: &str) -> String {
    format!("--{}", kebab_case(key))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_role_bound_once() {
        for (index, binding) in ROLE_TABLE.iter().enumerate() {
            assert_eq!(binding.role as usize, index, "{:?} out of order", binding.role);
        }
        assert_eq!(ColorRole::all().count(), ROLE_TABLE.len());
    }

    #[test]
    fn test_variables_follow_kebab_rule() {
        for binding in ROLE_TABLE {
            assert_eq!(binding.variable, variable_name(binding.key), "{}", binding.key);
        }
    }

    #[test]
    fn test_kebab_case() {
        assert_eq!(kebab_case("background"), "background");
        assert_eq!(kebab_case("scrollbarTrack"), "scrollbar-track");
        assert_eq!(kebab_case("chart1"), "chart-1");
        assert_eq!(kebab_case("sidebarPrimaryForeground"), "sidebar-primary-foreground");
        assert_eq!(kebab_case("chart12"), "chart-12");
    }

    #[test]
    fn test_from_key() {
        assert_eq!(ColorRole::from_key("scrollbarThumb"), Some(ColorRole::ScrollbarThumb));
        assert_eq!(ColorRole::from_key("--primary"), None);
        assert_eq!(ColorRole::Chart3.variable(), "--chart-3");
        assert_eq!(ColorRole::CardForeground.to_string(), "cardForeground");
    }
}
