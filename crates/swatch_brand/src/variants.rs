//! Tonal variants derived from one piece of logo markup

use serde::{Deserialize, Serialize};
use swatch_color::ColorScheme;

use crate::literal::{substitute_colors, to_hex_literal, BLACK, WHITE};

/// Fixed mid-gray used for the desaturated variant.
pub const GRAY: &str = "#808080";

/// The standard recolorings of a logo.
///
/// Always a pure function of `(markup, detected colors, mono color, scheme)`:
/// build one with [`generate_color_variants`], never field by field.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorVariants {
    /// The markup exactly as uploaded.
    pub original: String,
    /// Every detected color replaced with pure white.
    pub white: String,
    /// Every detected color replaced with pure black.
    pub black: String,
    /// Every detected color replaced with [`GRAY`].
    pub gray: String,
    /// Every detected color replaced with the mode's mono color.
    #[serde(default)]
    pub mono: String,
}

/// Build all variants of `markup`.
///
/// `mono_color` may be any color text [`to_hex_literal`] understands; when it
/// is not, the mono variant falls back to white in dark mode and black in
/// light mode so the silhouette still contrasts with the background.
pub fn generate_color_variants(
    markup: &str,
    detected_colors: &[String],
    mono_color: &str,
    scheme: ColorScheme,
) -> ColorVariants {
    let mono = resolve_mono_color(mono_color, scheme);
    ColorVariants {
        original: markup.to_string(),
        white: substitute_colors(markup, detected_colors, WHITE),
        black: substitute_colors(markup, detected_colors, BLACK),
        gray: substitute_colors(markup, detected_colors, GRAY),
        mono: substitute_colors(markup, detected_colors, &mono),
    }
}

/// The hex literal the mono variant is painted with.
pub fn resolve_mono_color(mono_color: &str, scheme: ColorScheme) -> String {
    to_hex_literal(mono_color).unwrap_or_else(|| {
        tracing::warn!(mono_color, "mono color is not a color literal, using contrast fallback");
        let fallback = if scheme.is_dark() { WHITE } else { BLACK };
        fallback.to_string()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detect_colors_from_svg;

    const SVG: &str = r##"<svg viewBox="0 0 10 10"><rect fill="#ff0000"/><circle stroke="#00FF00"/></svg>"##;

    #[test]
    fn test_original_is_untouched() {
        let colors = detect_colors_from_svg(SVG);
        let variants = generate_color_variants(SVG, &colors, "#123456", ColorScheme::Light);
        assert_eq!(variants.original, SVG);
    }

    #[test]
    fn test_silhouettes() {
        let colors = detect_colors_from_svg(SVG);
        let variants = generate_color_variants(SVG, &colors, "#123456", ColorScheme::Light);
        assert_eq!(detect_colors_from_svg(&variants.white), vec![WHITE.to_string()]);
        assert_eq!(detect_colors_from_svg(&variants.black), vec![BLACK.to_string()]);
        assert_eq!(detect_colors_from_svg(&variants.gray), vec![GRAY.to_string()]);
        assert_eq!(detect_colors_from_svg(&variants.mono), vec!["#123456".to_string()]);
    }

    #[test]
    fn test_mono_accepts_oklch() {
        let colors = detect_colors_from_svg(SVG);
        let variants =
            generate_color_variants(SVG, &colors, "oklch(0 0 0)", ColorScheme::Light);
        assert_eq!(variants.mono, variants.black);
    }

    #[test]
    fn test_mono_fallback_depends_on_scheme() {
        assert_eq!(resolve_mono_color("", ColorScheme::Dark), WHITE);
        assert_eq!(resolve_mono_color("nope", ColorScheme::Light), BLACK);
    }

    #[test]
    fn test_deterministic() {
        let colors = detect_colors_from_svg(SVG);
        let a = generate_color_variants(SVG, &colors, "#123456", ColorScheme::Dark);
        let b = generate_color_variants(SVG, &colors, "#123456", ColorScheme::Dark);
        assert_eq!(a, b);
    }
}
