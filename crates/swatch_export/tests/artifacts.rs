use pretty_assertions::assert_eq;
use swatch_color::ColorFormat;
use swatch_export::{export, flatten_palette, ExportKind, ExportOptions};
use swatch_theme::{ThemeData, ThemePreset, ROLE_TABLE};

#[test]
fn same_theme_exports_identically_twice() {
    let theme = ThemePreset::Slate.theme();
    for &kind in ExportKind::all() {
        let options = ExportOptions {
            kind,
            format: ColorFormat::Hex,
            include_dark: true,
        };
        let first = export(&theme, &options).unwrap();
        let second = export(&theme, &options).unwrap();
        assert_eq!(first, second, "{kind}");
    }
}

#[test]
fn export_does_not_mutate_theme() {
    let theme = ThemeData::default();
    let before = theme.clone();
    for &kind in ExportKind::all() {
        export(
            &theme,
            &ExportOptions {
                kind,
                ..ExportOptions::default()
            },
        )
        .unwrap();
    }
    assert_eq!(theme, before);
}

#[test]
fn generators_agree_on_variable_names() {
    let theme = ThemeData::default();
    let css = export(&theme, &ExportOptions::default()).unwrap();
    let js = export(
        &theme,
        &ExportOptions {
            kind: ExportKind::TailwindConfig,
            ..ExportOptions::default()
        },
    )
    .unwrap();

    for binding in ROLE_TABLE {
        assert!(css.contains(&format!("  {}: ", binding.variable)), "{}", binding.key);
        assert!(js.contains(&format!("var({}, ", binding.variable)), "{}", binding.key);
    }
}

#[test]
fn format_only_changes_color_notation() {
    let theme = ThemeData::default();
    let hex = export(
        &theme,
        &ExportOptions {
            format: ColorFormat::Hex,
            ..ExportOptions::default()
        },
    )
    .unwrap();
    let rgb = export(
        &theme,
        &ExportOptions {
            format: ColorFormat::Rgb,
            ..ExportOptions::default()
        },
    )
    .unwrap();

    assert_eq!(hex.lines().count(), rgb.lines().count());
    let tail = |text: &str| text.split("/* Typography */").nth(1).map(str::to_string);
    let hex_tail = tail(&hex).unwrap();
    let rgb_tail = tail(&rgb).unwrap();
    assert_eq!(
        hex_tail.split(".dark").next(),
        rgb_tail.split(".dark").next()
    );
}

#[test]
fn json_export_loads_back() {
    let theme = ThemePreset::Zinc.theme();
    let json = export(
        &theme,
        &ExportOptions {
            kind: ExportKind::Json,
            ..ExportOptions::default()
        },
    )
    .unwrap();
    assert_eq!(ThemeData::from_json(&json).unwrap(), theme);
}

#[test]
fn palette_keys_are_unique() {
    let palette = flatten_palette(&ThemeData::default());
    let mut names: Vec<&str> = palette.iter().map(|(name, _)| name.as_str()).collect();
    names.sort_unstable();
    names.dedup();
    assert_eq!(names.len(), palette.len());
}
