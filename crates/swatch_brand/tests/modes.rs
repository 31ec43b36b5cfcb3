use swatch_brand::{
    detect_colors_from_svg, BrandAssets, BrandError, LogoType, SvgUpload,
    DEFAULT_ASPECT_TOLERANCE, WHITE,
};
use swatch_color::ColorScheme;

const BASE: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 300 100"><rect width="300" height="100" fill="#1e66f5"/><circle cx="50" cy="50" r="20" fill="#FF0000"/></svg>"##;
const DARK: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 600 200"><rect width="600" height="200" fill="#89b4fa"/></svg>"##;
const SQUARE: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" width="50" height="50"><rect width="50" height="50" fill="#000"/></svg>"##;

fn assets_with_logo() -> (BrandAssets, String) {
    let mut assets = BrandAssets::new();
    let id = assets
        .add_from_upload(
            &SvgUpload::new("acme-wordmark.svg", BASE),
            LogoType::Horizontal,
            "#1e66f5",
        )
        .unwrap()
        .id()
        .to_string();
    (assets, id)
}

#[test]
fn dark_mode_edits_never_touch_light_mode() {
    let (mut assets, id) = assets_with_logo();
    let light_before = assets.get(&id).unwrap().light_mode().clone();

    let logo = assets.require_mut(&id).unwrap();
    logo.set_mono_color(ColorScheme::Dark, "#cdd6f4");
    logo.set_dark_mode_version(&SvgUpload::new("dark.svg", DARK), DEFAULT_ASPECT_TOLERANCE)
        .unwrap();
    logo.set_mono_color(ColorScheme::Dark, "oklch(1 0 0)");

    let logo = assets.get(&id).unwrap();
    assert_eq!(logo.light_mode(), &light_before);
    assert_eq!(
        detect_colors_from_svg(&logo.current_variants(ColorScheme::Dark).mono),
        vec![WHITE.to_string()]
    );
}

#[test]
fn dark_mode_version_is_shown_only_in_dark() {
    let (mut assets, id) = assets_with_logo();
    let logo = assets.require_mut(&id).unwrap();
    logo.set_dark_mode_version(&SvgUpload::new("dark.svg", DARK), DEFAULT_ASPECT_TOLERANCE)
        .unwrap();

    assert_eq!(logo.current_svg(ColorScheme::Light), BASE);
    assert_eq!(logo.current_svg(ColorScheme::Dark), DARK);
    assert_eq!(logo.current_variants(ColorScheme::Dark).original, DARK);
}

#[test]
fn removing_dark_version_leaves_base_intact() {
    let (mut assets, id) = assets_with_logo();
    let before = assets.get(&id).unwrap().clone();

    let logo = assets.require_mut(&id).unwrap();
    logo.set_dark_mode_version(&SvgUpload::new("dark.svg", DARK), DEFAULT_ASPECT_TOLERANCE)
        .unwrap();
    assert!(logo.remove_dark_mode_version().is_some());

    assert_eq!(assets.get(&id).unwrap(), &before);
}

#[test]
fn misshapen_dark_version_is_rejected_atomically() {
    let (mut assets, id) = assets_with_logo();
    let logo = assets.require_mut(&id).unwrap();

    let err = logo
        .set_dark_mode_version(&SvgUpload::new("dark.svg", SQUARE), DEFAULT_ASPECT_TOLERANCE)
        .unwrap_err();
    assert!(matches!(err, BrandError::AspectRatio { .. }));
    assert!(logo.dark_mode_version().is_none());
}

#[test]
fn primary_changes_reach_linked_modes_only() {
    let (mut assets, id) = assets_with_logo();
    assets
        .require_mut(&id)
        .unwrap()
        .set_mono_color(ColorScheme::Dark, "#f5e0dc");

    assert_eq!(assets.on_primary_changed(ColorScheme::Dark, "#8839ef"), 0);
    assert_eq!(assets.on_primary_changed(ColorScheme::Light, "#8839ef"), 1);

    let logo = assets.get(&id).unwrap();
    assert_eq!(logo.light_mode().mono_color(), "#8839ef");
    assert_eq!(logo.dark_mode().mono_color(), "#f5e0dc");
}

#[test]
fn recolor_rederives_variants_from_new_markup() {
    let (mut assets, id) = assets_with_logo();
    assets.replace_color(&id, "#ff0000", "#40a02b").unwrap();

    let logo = assets.get(&id).unwrap();
    assert_eq!(logo.detected_colors(), ["#1e66f5", "#40a02b"]);
    assert_eq!(logo.light_mode().variants().original, logo.svg_content());

    assert_eq!(
        assets.replace_color("missing", "#000", "#fff"),
        Err(BrandError::LogoNotFound("missing".to_string()))
    );
}

#[test]
fn dark_version_recolor_touches_only_the_override() {
    let (mut assets, id) = assets_with_logo();
    assert_eq!(
        assets.replace_dark_version_color(&id, "#89b4fa", "#11111b"),
        Err(BrandError::NoDarkModeVersion(id.clone()))
    );

    assets
        .require_mut(&id)
        .unwrap()
        .set_dark_mode_version(&SvgUpload::new("dark.svg", DARK), DEFAULT_ASPECT_TOLERANCE)
        .unwrap();
    let before = assets.get(&id).unwrap().clone();

    assets.replace_dark_version_color(&id, "#89B4FA", "#11111b").unwrap();

    let logo = assets.get(&id).unwrap();
    let version = logo.dark_mode_version().unwrap();
    assert_eq!(version.svg_content(), DARK.replace("#89b4fa", "#11111b"));
    assert_eq!(version.detected_colors(), ["#11111b"]);
    assert_eq!(version.variants().original, version.svg_content());
    assert!(version.variants().white.contains(&format!("fill=\"{WHITE}\"")));
    assert_eq!(logo.current_svg(ColorScheme::Dark), version.svg_content());

    assert_eq!(logo.svg_content(), before.svg_content());
    assert_eq!(logo.light_mode(), before.light_mode());
    assert_eq!(logo.dark_mode(), before.dark_mode());
}

#[test]
fn stored_library_round_trips() {
    let (assets, _) = assets_with_logo();
    let json = serde_json::to_string(&assets).unwrap();
    let mut back: BrandAssets = serde_json::from_str(&json).unwrap();
    back.refresh();
    assert_eq!(back, assets);
}
