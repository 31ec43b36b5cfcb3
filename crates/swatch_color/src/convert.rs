//! Free-function entry points over the color models

use crate::{Oklch, Rgb};

/// Format as `oklch(L C H)` with 4 decimals per component.
pub fn oklch_to_string(oklch: Oklch) -> String {
    oklch.to_string()
}

/// Parse `oklch(L C H)`; `None` on anything malformed.
pub fn parse_oklch_string(text: &str) -> Option<Oklch> {
    Oklch::parse(text)
}

pub fn oklch_to_hex(oklch: Oklch) -> String {
    oklch.to_hex()
}

pub fn oklch_to_rgb(oklch: Oklch) -> Rgb {
    oklch.to_rgb()
}
