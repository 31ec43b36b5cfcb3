//! Color literal detection and exact-token substitution in SVG markup
//!
//! Markup is trusted and pre-validated, so literals are matched with a small
//! tokenizer rather than a full XML parse. A literal only matches as a whole
//! token: `#112233` never matches inside `#1122330`, and fragment references
//! such as `url(#abc)` or `href="#abc"` are never treated as colors.
//!
//! A hex literal also has to sit where a color value goes: at the start of an
//! attribute value or inside a CSS declaration value. Character references
//! (`&#160;`), CSS id selectors (`#logo { ... }`) and text content are left
//! alone.
//!
//! Literals are normalized to lowercase. `#000`, `#000000` and `black` all
//! normalize to `#000000`; `#fff`, `#ffffff` and `white` to `#ffffff`. Other
//! short hex literals keep their short form, so `#f00` and `#ff0000` are
//! distinct tokens.

use std::sync::OnceLock;

use regex::{Captures, Regex};
use rustc_hash::FxHashSet;
use swatch_color::{Oklch, Rgb};

use crate::error::{BrandError, Result};

pub const BLACK: &str = "#000000";
pub const WHITE: &str = "#ffffff";

fn hex_literal() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r#"(url\(\s*['"]?|href\s*=\s*['"])?(#(?:[0-9a-fA-F]{6}|[0-9a-fA-F]{3}))\b"#)
            .expect("Invalid hex literal pattern")
    })
}

/// Whether the hex literal at `start..end` is in a color position.
fn in_color_position(markup: &str, start: usize, end: usize) -> bool {
    let before = &markup[..start];
    if before.ends_with('&') {
        return false;
    }

    let boundary = before
        .char_indices()
        .rev()
        .find(|(_, c)| matches!(c, '"' | '\'' | '=' | ':' | '{' | '}' | '<' | '>'));
    let in_value = match boundary {
        Some((index, '"' | '\'')) => before[..index].trim_end().ends_with('='),
        Some((_, '=' | ':')) => true,
        _ => false,
    };

    in_value && !opens_rule(&markup[end..])
}

/// A selector is followed by `{` before any declaration or markup delimiter.
fn opens_rule(rest: &str) -> bool {
    rest.chars()
        .find(|c| matches!(c, '{' | ';' | '}' | '"' | '\'' | '<' | '>'))
        == Some('{')
}

fn named_literal() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(
            r#"(?i)\b((?:stop-|flood-|lighting-)?color|fill|stroke)(\s*[:=]\s*['"]?\s*)(black|white)\b"#,
        )
        .expect("Invalid named literal pattern")
    })
}

/// Normalize a single color literal, or `None` if it is not one this module
/// recognizes.
pub fn normalize_literal(literal: &str) -> Option<String> {
    let lower = literal.trim().to_ascii_lowercase();
    match lower.as_str() {
        "black" | "#000" | "#000000" => return Some(BLACK.to_string()),
        "white" | "#fff" | "#ffffff" => return Some(WHITE.to_string()),
        _ => {}
    }

    let digits = lower.strip_prefix('#')?;
    let valid = matches!(digits.len(), 3 | 6) && digits.bytes().all(|b| b.is_ascii_hexdigit());
    valid.then_some(lower)
}

/// Every distinct color literal in `markup`, in first-seen order.
pub fn detect_colors_from_svg(markup: &str) -> Vec<String> {
    let mut found: Vec<(usize, String)> = Vec::new();

    for caps in hex_literal().captures_iter(markup) {
        if caps.get(1).is_some() {
            continue;
        }
        let Some(literal) = caps.get(2) else {
            continue;
        };
        if !in_color_position(markup, literal.start(), literal.end()) {
            continue;
        }
        if let Some(normalized) = normalize_literal(literal.as_str()) {
            found.push((literal.start(), normalized));
        }
    }

    for caps in named_literal().captures_iter(markup) {
        if let Some(literal) = caps.get(3) {
            if let Some(normalized) = normalize_literal(literal.as_str()) {
                found.push((literal.start(), normalized));
            }
        }
    }

    found.sort_by_key(|(position, _)| *position);

    let mut seen = FxHashSet::default();
    found
        .into_iter()
        .filter_map(|(_, literal)| seen.insert(literal.clone()).then_some(literal))
        .collect()
}

/// Replace every occurrence of any of `targets` with `replacement` in a single
/// pass over the markup.
///
/// Targets are compared after normalization. Replacement text is inserted
/// verbatim and is never itself rematched.
pub fn substitute_colors(markup: &str, targets: &[String], replacement: &str) -> String {
    let targets: FxHashSet<String> = targets
        .iter()
        .filter_map(|target| normalize_literal(target))
        .collect();
    if targets.is_empty() {
        return markup.to_string();
    }

    let after_hex = hex_literal().replace_all(markup, |caps: &Captures| {
        let whole = &caps[0];
        let Some(literal) = caps.get(2).filter(|_| caps.get(1).is_none()) else {
            return whole.to_string();
        };
        if !in_color_position(markup, literal.start(), literal.end()) {
            return whole.to_string();
        }
        match normalize_literal(literal.as_str()) {
            Some(literal) if targets.contains(&literal) => replacement.to_string(),
            _ => whole.to_string(),
        }
    });

    named_literal()
        .replace_all(&after_hex, |caps: &Captures| match normalize_literal(&caps[3]) {
            Some(literal) if targets.contains(&literal) => {
                format!("{}{}{}", &caps[1], &caps[2], replacement)
            }
            _ => caps[0].to_string(),
        })
        .into_owned()
}

/// Replace one color literal everywhere it appears.
///
/// `target` must be a hex literal or `black`/`white`. Matching is
/// case-insensitive and whole-token; only pure black and white also match
/// their named and short-hex aliases. `replacement` is normalized to
/// lowercase `#rrggbb` when it is any color [`to_hex_literal`] understands.
pub fn replace_color_in_svg(markup: &str, target: &str, replacement: &str) -> Result<String> {
    let target =
        normalize_literal(target).ok_or_else(|| BrandError::InvalidColor(target.to_string()))?;
    let replacement = to_hex_literal(replacement)
        .ok_or_else(|| BrandError::InvalidColor(replacement.to_string()))?;

    Ok(substitute_colors(markup, &[target], &replacement))
}

/// Resolve any color text (hex, `oklch(...)`, `black`, `white`) to a lowercase
/// `#rrggbb` literal that is safe to place in an attribute.
pub fn to_hex_literal(color: &str) -> Option<String> {
    let trimmed = color.trim();
    if let Some(rgb) = Rgb::from_hex(trimmed).filter(|_| trimmed.starts_with('#')) {
        return Some(rgb.to_hex());
    }
    if let Some(oklch) = Oklch::parse(trimmed) {
        return Some(oklch.to_hex());
    }
    match trimmed.to_ascii_lowercase().as_str() {
        "black" => Some(BLACK.to_string()),
        "white" => Some(WHITE.to_string()),
        _ => None,
    }
}
