//! 8-bit sRGB colors and hex text

use std::fmt;

use serde::{Deserialize, Serialize};

/// An 8-bit sRGB color.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#rrggbb` or `#rgb`, with or without the leading `#`.
    ///
    /// Case-insensitive. Returns `None` for any other length or a non-hex digit.
    pub fn from_hex(text: &str) -> Option<Self> {
        let digits = text.trim();
        let digits = digits.strip_prefix('#').unwrap_or(digits);
        if !digits.bytes().all(|byte| byte.is_ascii_hexdigit()) {
            return None;
        }

        match digits.len() {
            6 => {
                let value = u32::from_str_radix(digits, 16).ok()?;
                Some(Self::from_u32(value))
            }
            3 => {
                let mut channels = digits.chars().map(|ch| {
                    let nibble = ch.to_digit(16).unwrap_or(0) as u8;
                    nibble * 0x11
                });
                Some(Self::new(
                    channels.next()?,
                    channels.next()?,
                    channels.next()?,
                ))
            }
            _ => None,
        }
    }

    /// Build from a packed `0xRRGGBB` value.
    pub const fn from_u32(value: u32) -> Self {
        Self {
            r: ((value >> 16) & 0xFF) as u8,
            g: ((value >> 8) & 0xFF) as u8,
            b: (value & 0xFF) as u8,
        }
    }

    /// Lowercase `#rrggbb`.
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// CSS decimal form, `rgb(r, g, b)`.
    pub fn to_css(&self) -> String {
        format!("rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_long_and_short() {
        assert_eq!(Rgb::from_hex("#1E66F5"), Some(Rgb::new(0x1e, 0x66, 0xf5)));
        assert_eq!(Rgb::from_hex("1e66f5"), Some(Rgb::new(0x1e, 0x66, 0xf5)));
        assert_eq!(Rgb::from_hex("#f0a"), Some(Rgb::new(0xff, 0x00, 0xaa)));
    }

    #[test]
    fn test_parse_rejects_invalid() {
        assert_eq!(Rgb::from_hex("#12345"), None);
        assert_eq!(Rgb::from_hex("#gg0000"), None);
        assert_eq!(Rgb::from_hex("#+12345"), None);
        assert_eq!(Rgb::from_hex(""), None);
    }

    #[test]
    fn test_formats() {
        let color = Rgb::new(255, 0, 16);
        assert_eq!(color.to_hex(), "#ff0010");
        assert_eq!(color.to_css(), "rgb(255, 0, 16)");
    }
}
