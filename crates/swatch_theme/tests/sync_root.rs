use pretty_assertions::assert_eq;
use swatch_color::ColorScheme;
use swatch_theme::{
    sync, ColorRole, ScrollConfig, StyleBatch, StyleRoot, StyleSink, ThemeData, ThemePreset,
    ROLE_TABLE,
};

#[test]
fn applying_a_theme_publishes_every_role() {
    let root = StyleRoot::new();
    let theme = ThemePreset::Zinc.theme();
    sync::apply_theme_to_root(&root, &theme, ColorScheme::Light);

    for binding in ROLE_TABLE {
        let token = theme.light_colors.get(binding.role).unwrap();
        assert_eq!(
            root.property(binding.variable).as_deref(),
            Some(token.css_value()),
            "{}",
            binding.key
        );
    }
}

#[test]
fn switching_modes_overwrites_colors_in_place() {
    let root = StyleRoot::new();
    let theme = ThemeData::default();
    sync::apply_theme_to_root(&root, &theme, ColorScheme::Light);
    let count = root.property_count();

    sync::apply_theme_to_root(&root, &theme, ColorScheme::Dark);
    assert_eq!(root.property_count(), count);
    assert_eq!(
        root.property(ColorRole::Background.variable()).as_deref(),
        Some(theme.dark_colors.get(ColorRole::Background).unwrap().css_value())
    );
}

#[test]
fn reset_with_nothing_applied_leaves_root_untouched() {
    let root = StyleRoot::new();
    let mut batch = StyleBatch::new("host");
    batch.set("--host-owned", "1");
    root.commit(batch);
    let before = root.snapshot();

    sync::reset_theme_variables(&root);
    assert_eq!(root.snapshot(), before);
}

#[test]
fn hide_toggle_keeps_exactly_one_fragment() {
    let root = StyleRoot::new();
    let mut theme = ThemeData::default();
    theme.scroll = ScrollConfig {
        hide: true,
        ..ScrollConfig::default()
    };
    sync::apply_theme_to_root(&root, &theme, ColorScheme::Light);
    assert_eq!(root.fragment_count(), 1);
    assert!(root.to_css().contains("width: 0"));

    theme.scroll.hide = false;
    sync::apply_scroll_elements(&root, &theme.scroll);
    assert_eq!(root.fragment_count(), 1);
    assert!(root.to_css().contains("scrollbar-color: var(--scrollbar-thumb)"));
}

#[test]
fn partial_theme_applies_without_failing() {
    let root = StyleRoot::new();
    let theme = ThemeData::from_json(r#"{"lightColors": {}, "scroll": {"radius": null}}"#).unwrap();
    sync::apply_theme_to_root(&root, &theme, ColorScheme::Light);

    assert_eq!(root.property(ColorRole::Primary.variable()), None);
    assert_eq!(root.property("--scrollbar-radius"), None);
    assert!(root.property("--font-sans").is_some());
}

#[test]
fn global_root_is_shared() {
    let a = StyleRoot::global();
    let b = StyleRoot::global();
    assert!(std::ptr::eq(a, b));
}
