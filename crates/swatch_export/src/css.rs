//! Style variable block generator

use std::fmt::Write;

use swatch_color::ColorFormat;
use swatch_theme::{css_length, css_number, vars, Spacing, ThemeColors, ThemeData};

/// Fixed auxiliary tokens published with every theme.
pub const SIZING: &[(&str, &str)] = &[
    ("--size-xs", "20rem"),
    ("--size-sm", "24rem"),
    ("--size-md", "28rem"),
    ("--size-lg", "32rem"),
    ("--size-xl", "36rem"),
    ("--size-2xl", "42rem"),
    ("--size-3xl", "48rem"),
    ("--size-4xl", "56rem"),
    ("--size-5xl", "64rem"),
    ("--size-6xl", "72rem"),
    ("--size-7xl", "80rem"),
    ("--size-full", "100%"),
];

pub const Z_INDEX: &[(&str, &str)] = &[
    ("--z-base", "0"),
    ("--z-dropdown", "1000"),
    ("--z-sticky", "1100"),
    ("--z-overlay", "1300"),
    ("--z-modal", "1400"),
    ("--z-popover", "1500"),
    ("--z-toast", "1700"),
    ("--z-tooltip", "1800"),
];

pub const OPACITY: &[(&str, &str)] = &[
    ("--opacity-0", "0"),
    ("--opacity-5", "0.05"),
    ("--opacity-10", "0.1"),
    ("--opacity-25", "0.25"),
    ("--opacity-50", "0.5"),
    ("--opacity-60", "0.6"),
    ("--opacity-75", "0.75"),
    ("--opacity-90", "0.9"),
    ("--opacity-100", "1"),
];

pub const BLUR: &[(&str, &str)] = &[
    ("--blur-xs", "4px"),
    ("--blur-sm", "8px"),
    ("--blur-md", "12px"),
    ("--blur-lg", "16px"),
    ("--blur-xl", "24px"),
    ("--blur-2xl", "40px"),
    ("--blur-3xl", "64px"),
];

pub const MOTION: &[(&str, &str)] = &[
    ("--duration-fast", "150ms"),
    ("--duration-normal", "250ms"),
    ("--duration-slow", "400ms"),
    ("--ease-linear", "linear"),
    ("--ease-in", "cubic-bezier(0.4, 0, 1, 1)"),
    ("--ease-out", "cubic-bezier(0, 0, 0.2, 1)"),
    ("--ease-in-out", "cubic-bezier(0.4, 0, 0.2, 1)"),
];

/// Render the theme as a `:root` variable block, plus a `.dark` block of
/// dark-mode colors when `include_dark` is set.
pub fn generate_css(theme: &ThemeData, format: ColorFormat, include_dark: bool) -> String {
    let mut css = String::with_capacity(8 * 1024);
    css.push_str(":root {\n");
    write_colors(&mut css, &theme.light_colors, format);

    section(&mut css, "Typography");
    let typography = &theme.typography;
    declare(&mut css, vars::FONT_SANS, &typography.font_sans);
    declare(&mut css, vars::FONT_SERIF, &typography.font_serif);
    declare(&mut css, vars::FONT_MONO, &typography.font_mono);
    declare(&mut css, vars::FONT_SIZE_BASE, &css_length(typography.base_size, "px"));
    declare(&mut css, vars::LINE_HEIGHT_BASE, &css_number(typography.line_height));
    declare(&mut css, vars::LETTER_SPACING, &css_length(typography.letter_spacing, "em"));

    section(&mut css, "Borders");
    let borders = &theme.borders;
    declare(&mut css, vars::RADIUS, &css_length(borders.radius, "rem"));
    for (suffix, rem) in borders.scale() {
        declare(&mut css, &format!("{}-{suffix}", vars::RADIUS), &css_length(rem, "rem"));
    }
    let component_radii = [
        (vars::RADIUS_BUTTON, borders.button_radius),
        (vars::RADIUS_CARD, borders.card_radius),
        (vars::RADIUS_INPUT, borders.input_radius),
        (vars::RADIUS_BADGE, borders.badge_radius),
    ];
    for (name, radius) in component_radii {
        let value = match radius {
            Some(rem) => css_length(rem, "rem"),
            None => format!("var({})", vars::RADIUS),
        };
        declare(&mut css, name, &value);
    }
    declare(&mut css, vars::BORDER_WIDTH, &css_length(borders.width, "px"));

    section(&mut css, "Spacing");
    declare(&mut css, vars::SPACING, &css_length(theme.spacing.base, "rem"));
    for step in Spacing::STEPS {
        declare(
            &mut css,
            &format!("{}-{step}", vars::SPACING),
            &css_length(theme.spacing.step(step), "rem"),
        );
    }

    section(&mut css, "Shadows");
    for (elevation, value) in theme.shadows.css_values() {
        declare(&mut css, elevation.variable(), &value);
    }

    section(&mut css, "Scrollbar");
    let scroll = &theme.scroll;
    declare(&mut css, vars::SCROLL_BEHAVIOR, &scroll.behavior.to_string());
    let width = if scroll.hide { 0.0 } else { scroll.width };
    declare(&mut css, vars::SCROLLBAR_WIDTH, &css_length(width, "px"));
    declare(
        &mut css,
        vars::SCROLLBAR_RADIUS,
        &css_length(scroll.radius.unwrap_or(0.0), "px"),
    );

    for (title, tokens) in [
        ("Sizing", SIZING),
        ("Z-index", Z_INDEX),
        ("Opacity", OPACITY),
        ("Blur", BLUR),
        ("Motion", MOTION),
    ] {
        section(&mut css, title);
        for (name, value) in tokens {
            declare(&mut css, name, value);
        }
    }
    css.push_str("}\n");

    if include_dark {
        css.push_str("\n.dark {\n");
        write_colors(&mut css, &theme.dark_colors, format);
        css.push_str("}\n");
    }
    css
}

/// Bare identifier of a variable name: `--card-foreground` becomes `card-foreground`.
pub fn identifier(variable: &str) -> &str {
    variable.trim_start_matches("--")
}

fn write_colors(css: &mut String, colors: &ThemeColors, format: ColorFormat) {
    for (role, token) in colors.published() {
        declare(css, role.variable(), &token.format(format));
    }
}

fn section(css: &mut String, title: &str) {
    let _ = write!(css, "\n  /* {title} */\n");
}

fn declare(css: &mut String, name: &str, value: &str) {
    let _ = writeln!(css, "  {name}: {value};");
}
