//! Build-tool (tailwind) configuration module generator

use std::fmt::Write;

use serde_json::Value;
use swatch_color::ColorScheme;
use swatch_theme::{vars, Spacing, ThemeColors, ThemeData, ROLE_TABLE};

use crate::css::identifier;

/// Flattened `name -> #rrggbb` mapping of both modes.
///
/// Light colors use the plain identifier (`card-foreground`), dark colors are
/// prefixed with `dark-`. Entries follow role-table order, light first.
pub fn flatten_palette(theme: &ThemeData) -> Vec<(String, String)> {
    let mut palette = Vec::with_capacity(ROLE_TABLE.len() * 2);
    for scheme in [ColorScheme::Light, ColorScheme::Dark] {
        let prefix = if scheme.is_dark() { "dark-" } else { "" };
        palette.extend(palette_entries(theme.colors(scheme), prefix));
    }
    palette
}

fn palette_entries<'a>(
    colors: &'a ThemeColors,
    prefix: &'a str,
) -> impl Iterator<Item = (String, String)> + 'a {
    colors.published().map(move |(role, token)| {
        (format!("{prefix}{}", identifier(role.variable())), token.hex.clone())
    })
}

/// Render a CommonJS tailwind config whose colors, fonts, radii, spacing and
/// shadows all reference the variables the CSS generator declares.
pub fn generate_tailwind_config(theme: &ThemeData) -> String {
    let mut js = String::with_capacity(6 * 1024);
    js.push_str("const palette = {\n");
    for (name, hex) in flatten_palette(theme) {
        let _ = writeln!(js, "  {}: {},", quote(&name), quote(&hex));
    }
    js.push_str("};\n\n");

    js.push_str("/** @type {import('tailwindcss').Config} */\n");
    js.push_str("module.exports = {\n");
    js.push_str("  darkMode: \"class\",\n");
    js.push_str("  theme: {\n");
    js.push_str("    extend: {\n");

    js.push_str("      colors: {\n");
    for (role, _) in theme.light_colors.published() {
        let name = identifier(role.variable());
        let _ = writeln!(
            js,
            "        {}: `var({}, ${{palette[{}]}})`,",
            quote(name),
            role.variable(),
            quote(name)
        );
    }
    js.push_str("      },\n");

    js.push_str("      fontFamily: {\n");
    let typography = &theme.typography;
    for (key, stack) in [
        ("sans", &typography.font_sans),
        ("serif", &typography.font_serif),
        ("mono", &typography.font_mono),
    ] {
        let families: Vec<String> = stack
            .split(',')
            .map(str::trim)
            .filter(|family| !family.is_empty())
            .map(quote)
            .collect();
        let _ = writeln!(js, "        {key}: [{}],", families.join(", "));
    }
    js.push_str("      },\n");

    js.push_str("      borderRadius: {\n");
    for (suffix, _) in theme.borders.scale() {
        let _ = writeln!(js, "        {suffix}: \"var({}-{suffix})\",", vars::RADIUS);
    }
    let _ = writeln!(js, "        DEFAULT: \"var({})\",", vars::RADIUS);
    for name in [
        vars::RADIUS_BUTTON,
        vars::RADIUS_CARD,
        vars::RADIUS_INPUT,
        vars::RADIUS_BADGE,
    ] {
        let key = name.trim_start_matches("--radius-");
        let _ = writeln!(js, "        {key}: \"var({name})\",");
    }
    js.push_str("      },\n");

    js.push_str("      spacing: {\n");
    for step in Spacing::STEPS {
        let _ = writeln!(js, "        \"{step}\": \"var({}-{step})\",", vars::SPACING);
    }
    js.push_str("      },\n");

    js.push_str("      boxShadow: {\n");
    for (elevation, _) in theme.shadows.css_values() {
        let _ = writeln!(
            js,
            "        {}: \"var({})\",",
            quote(elevation.id()),
            elevation.variable()
        );
    }
    js.push_str("      },\n");

    js.push_str("    },\n");
    js.push_str("  },\n");
    js.push_str("  plugins: [],\n");
    js.push_str("};\n");
    js
}

/// A JavaScript string literal.
fn quote(text: &str) -> String {
    Value::String(text.to_string()).to_string()
}
