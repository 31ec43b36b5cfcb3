//! Projection of theme data onto a style root
//!
//! Every public function builds one [`StyleBatch`] and commits it once, so
//! each call is all-or-nothing from a reader's point of view. Missing
//! optional values skip their variable; nothing here fails.

use swatch_color::ColorScheme;
use tracing::debug;

use crate::colors::ThemeColors;
use crate::roles::{ROLE_TABLE, SCROLLBAR_ROLES};
use crate::root::{StyleBatch, StyleSink};
use crate::theme::ThemeData;
use crate::tokens::{css_length, css_number, Borders, ScrollConfig, Shadows, Spacing, Typography};
use crate::vars;

/// Write every mapped color role present in `colors`.
pub fn apply_mode_specific_colors(root: &dyn StyleSink, colors: &ThemeColors) -> usize {
    let mut batch = StyleBatch::new("colors");
    push_colors(&mut batch, colors);
    root.commit(batch)
}

/// Write only the scrollbar track and thumb colors.
pub fn apply_scrollbar_colors(root: &dyn StyleSink, colors: &ThemeColors) -> usize {
    let mut batch = StyleBatch::new("scrollbar-colors");
    for role in SCROLLBAR_ROLES {
        if let Some(value) = colors.get(role).map(|token| token.css_value()) {
            if !value.is_empty() {
                batch.set(role.variable(), value);
            }
        }
    }
    root.commit(batch)
}

pub fn apply_typography(root: &dyn StyleSink, typography: &Typography) -> usize {
    let mut batch = StyleBatch::new("typography");
    push_typography(&mut batch, typography);
    root.commit(batch)
}

pub fn apply_borders(root: &dyn StyleSink, borders: &Borders) -> usize {
    let mut batch = StyleBatch::new("borders");
    push_borders(&mut batch, borders);
    root.commit(batch)
}

pub fn apply_spacing(root: &dyn StyleSink, spacing: &Spacing) -> usize {
    let mut batch = StyleBatch::new("spacing");
    push_spacing(&mut batch, spacing);
    root.commit(batch)
}

pub fn apply_shadows(root: &dyn StyleSink, shadows: &Shadows) -> usize {
    let mut batch = StyleBatch::new("shadows");
    push_shadows(&mut batch, shadows);
    root.commit(batch)
}

/// Write scroll variables and replace the scrollbar stylesheet fragment.
pub fn apply_scroll_elements(root: &dyn StyleSink, scroll: &ScrollConfig) -> usize {
    let mut batch = StyleBatch::new("scroll");
    push_scroll(&mut batch, scroll);
    root.commit(batch)
}

/// Apply a whole theme for one display mode.
///
/// Scroll styling goes last because its fragment is built from the scroll
/// variables written before it.
pub fn apply_theme_to_root(root: &dyn StyleSink, theme: &ThemeData, scheme: ColorScheme) -> usize {
    let mut batch = StyleBatch::new("theme");
    push_colors(&mut batch, theme.colors(scheme));
    push_typography(&mut batch, &theme.typography);
    push_borders(&mut batch, &theme.borders);
    push_spacing(&mut batch, &theme.spacing);
    push_shadows(&mut batch, &theme.shadows);
    batch.set(vars::COLOR_SCHEME, scheme.id());
    push_scroll(&mut batch, &theme.scroll);

    let changed = root.commit(batch);
    debug!(%scheme, changed, "applied theme to style root");
    changed
}

/// Remove everything this module ever writes, including both scrollbar
/// fragments. Safe on a root that was never written to.
pub fn reset_theme_variables(root: &dyn StyleSink) -> usize {
    let mut batch = StyleBatch::new("reset");
    for binding in ROLE_TABLE {
        batch.remove(binding.variable);
    }
    for name in vars::TYPOGRAPHY.iter().chain(&vars::BORDERS).chain(&vars::SCROLL) {
        batch.remove(*name);
    }
    batch.remove(vars::SPACING);
    for elevation in crate::tokens::ShadowElevation::all() {
        batch.remove(elevation.variable());
    }
    batch.remove(vars::COLOR_SCHEME);
    batch.remove_fragment(vars::LEGACY_SCROLLBAR_FRAGMENT);
    batch.remove_fragment(vars::SCROLLBAR_FRAGMENT);
    root.commit(batch)
}

fn push_colors(batch: &mut StyleBatch, colors: &ThemeColors) {
    for (role, token) in colors.published() {
        let value = token.css_value();
        if value.is_empty() {
            continue;
        }
        batch.set(role.variable(), value);
    }
}

fn push_typography(batch: &mut StyleBatch, typography: &Typography) {
    batch
        .set(vars::FONT_SANS, typography.font_sans.as_str())
        .set(vars::FONT_SERIF, typography.font_serif.as_str())
        .set(vars::FONT_MONO, typography.font_mono.as_str())
        .set(vars::FONT_SIZE_BASE, css_length(typography.base_size, "px"))
        .set(vars::LINE_HEIGHT_BASE, css_number(typography.line_height))
        .set(vars::LETTER_SPACING, css_length(typography.letter_spacing, "em"));
}

fn push_borders(batch: &mut StyleBatch, borders: &Borders) {
    batch
        .set(vars::RADIUS, css_length(borders.radius, "rem"))
        .set(vars::BORDER_WIDTH, css_length(borders.width, "px"));

    let component_radii = [
        (vars::RADIUS_BUTTON, borders.button_radius),
        (vars::RADIUS_CARD, borders.card_radius),
        (vars::RADIUS_INPUT, borders.input_radius),
        (vars::RADIUS_BADGE, borders.badge_radius),
    ];
    for (name, radius) in component_radii {
        if let Some(radius) = radius {
            batch.set(name, css_length(radius, "rem"));
        }
    }
}

fn push_spacing(batch: &mut StyleBatch, spacing: &Spacing) {
    batch.set(vars::SPACING, css_length(spacing.base, "rem"));
}

fn push_shadows(batch: &mut StyleBatch, shadows: &Shadows) {
    for (elevation, css) in shadows.css_values() {
        batch.set(elevation.variable(), css);
    }
}

fn push_scroll(batch: &mut StyleBatch, scroll: &ScrollConfig) {
    let width = css_length(scroll.width, "px");
    let radius = scroll.radius.map(|radius| css_length(radius, "px"));

    batch
        .set(vars::SCROLL_BEHAVIOR, scroll.behavior.to_string())
        .set(vars::SCROLLBAR_WIDTH, width.as_str());
    if let Some(radius) = &radius {
        batch.set(vars::SCROLLBAR_RADIUS, radius.as_str());
    }

    let css = if scroll.hide {
        hidden_scrollbar_css()
    } else {
        visible_scrollbar_css(&width, radius.as_deref().unwrap_or("0"))
    };
    batch
        .remove_fragment(vars::LEGACY_SCROLLBAR_FRAGMENT)
        .write_fragment(vars::SCROLLBAR_FRAGMENT, css);
}

fn hidden_scrollbar_css() -> String {
    "\
html { scroll-behavior: var(--scroll-behavior, auto); }
* { scrollbar-width: none; -ms-overflow-style: none; }
*::-webkit-scrollbar { width: 0; height: 0; display: none; }
"
    .to_string()
}

fn visible_scrollbar_css(width: &str, radius: &str) -> String {
    format!(
        "\
html {{ scroll-behavior: var(--scroll-behavior, auto); }}
* {{ scrollbar-width: thin; scrollbar-color: var(--scrollbar-thumb) var(--scrollbar-track); }}
*::-webkit-scrollbar {{ width: var(--scrollbar-width, {width}); height: var(--scrollbar-width, {width}); }}
*::-webkit-scrollbar-track {{ background: var(--scrollbar-track); }}
*::-webkit-scrollbar-thumb {{ background: var(--scrollbar-thumb); border-radius: var(--scrollbar-radius, {radius}); }}
"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::root::StyleRoot;
    use crate::roles::ColorRole;
    use swatch_color::{ColorToken, Rgb};

    #[test]
    fn test_apply_twice_is_idempotent() {
        let root = StyleRoot::new();
        let theme = ThemeData::default();

        assert!(apply_theme_to_root(&root, &theme, ColorScheme::Light) > 0);
        let once = root.snapshot();
        assert_eq!(apply_theme_to_root(&root, &theme, ColorScheme::Light), 0);
        assert_eq!(root.snapshot(), once);
    }

    #[test]
    fn test_reset_on_fresh_root_is_noop() {
        let root = StyleRoot::new();
        assert_eq!(reset_theme_variables(&root), 0);
        assert_eq!(root.snapshot(), Default::default());
    }

    #[test]
    fn test_reset_removes_everything_applied() {
        let root = StyleRoot::new();
        let mut theme = ThemeData::default();
        theme.borders.card_radius = Some(1.0);
        apply_theme_to_root(&root, &theme, ColorScheme::Dark);
        apply_theme_to_root(&root, &theme, ColorScheme::Light);

        reset_theme_variables(&root);
        assert_eq!(root.property_count(), 0);
        assert_eq!(root.fragment_count(), 0);
    }

    #[test]
    fn test_colors_prefer_perceptual_string() {
        let root = StyleRoot::new();
        let mut colors = ThemeColors::new();
        let mut legacy = ColorToken::from_rgb("primary", Rgb::new(30, 102, 245));
        legacy.oklch_string = None;
        legacy.value = "#1e66f5".to_string();
        colors.set(ColorRole::Primary, legacy);
        colors.set(ColorRole::Ring, ColorToken::from_rgb("ring", Rgb::BLACK));

        apply_mode_specific_colors(&root, &colors);
        assert_eq!(root.property("--primary").as_deref(), Some("#1e66f5"));
        assert_eq!(
            root.property("--ring").as_deref(),
            Some("oklch(0.0000 0.0000 0.0000)")
        );
        assert_eq!(root.property("--background"), None);
    }

    #[test]
    fn test_missing_component_radius_keeps_previous_value() {
        let root = StyleRoot::new();
        let mut borders = Borders {
            button_radius: Some(0.75),
            ..Borders::default()
        };
        apply_borders(&root, &borders);
        borders.button_radius = None;
        apply_borders(&root, &borders);

        assert_eq!(root.property(vars::RADIUS_BUTTON).as_deref(), Some("0.75rem"));
    }

    #[test]
    fn test_scrollbar_fast_path_touches_two_variables() {
        let root = StyleRoot::new();
        let theme = ThemeData::default();
        assert_eq!(apply_scrollbar_colors(&root, theme.colors(ColorScheme::Dark)), 2);
        assert_eq!(root.property_count(), 2);
        assert!(root.property("--scrollbar-thumb").is_some());
    }

    #[test]
    fn test_hidden_then_visible_replaces_single_fragment() {
        let root = StyleRoot::new();
        let mut scroll = ScrollConfig {
            hide: true,
            ..ScrollConfig::default()
        };
        apply_scroll_elements(&root, &scroll);
        assert_eq!(root.fragment_count(), 1);
        let hidden = root.fragment(vars::SCROLLBAR_FRAGMENT).unwrap();
        assert!(hidden.contains("width: 0"));

        scroll.hide = false;
        apply_scroll_elements(&root, &scroll);
        assert_eq!(root.fragment_count(), 1);
        let visible = root.fragment(vars::SCROLLBAR_FRAGMENT).unwrap();
        assert!(visible.contains("var(--scrollbar-width, 8px)"));
        assert!(!visible.contains("display: none"));
    }

    #[test]
    fn test_legacy_fragment_is_removed() {
        let root = StyleRoot::new();
        let mut legacy = StyleBatch::new("legacy");
        legacy.write_fragment(vars::LEGACY_SCROLLBAR_FRAGMENT, "::-webkit-scrollbar {}");
        root.commit(legacy);

        apply_scroll_elements(&root, &ScrollConfig::default());
        assert_eq!(root.fragment(vars::LEGACY_SCROLLBAR_FRAGMENT), None);
        assert_eq!(root.fragment_count(), 1);
    }

    #[test]
    fn test_color_scheme_property() {
        let root = StyleRoot::new();
        apply_theme_to_root(&root, &ThemeData::default(), ColorScheme::Dark);
        assert_eq!(root.property("color-scheme").as_deref(), Some("dark"));
    }
}
