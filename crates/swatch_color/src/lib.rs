//! Swatch Color Models
//!
//! Pure, stateless conversions between the color models a theme editor works
//! with:
//!
//! - **OKLCH**: perceptual lightness/chroma/hue, the source of truth for precision
//! - **RGB**: 8-bit sRGB channels
//! - **Hex**: `#rrggbb` text (short `#rgb` accepted on input)
//! - **HSV**: hue/saturation/value as used by color pickers
//!
//! # Example
//!
//! ```rust
//! use swatch_color::{Oklch, ColorToken};
//!
//! let teal = Oklch::new(0.5, 0.1, 180.0);
//! assert_eq!(teal.to_string(), "oklch(0.5000 0.1000 180.0000)");
//! assert_eq!(Oklch::parse("oklch(0.5  0.1 180)"), Some(teal));
//!
//! // Tokens keep every representation in sync
//! let mut token = ColorToken::from_oklch("primary", teal);
//! token.set_hex("#ff0000");
//! assert_eq!(token.rgb.r, 255);
//! ```
//!
//! # Rounding
//!
//! Every rounding step uses half-away-from-zero (`f64::round`): OKLCH
//! components to 4 decimals, HSV components to 2 decimals and RGB channels to
//! the nearest integer. Out-of-gamut OKLCH values are not gamut-mapped; the
//! linear channels are clamped before encoding.

mod convert;
mod format;
mod hsv;
mod oklch;
mod rgb;
mod scheme;
mod token;

pub use convert::{oklch_to_hex, oklch_to_rgb, oklch_to_string, parse_oklch_string};
pub use format::{ColorFormat, ParseFormatError};
pub use hsv::Hsv;
pub use oklch::{Oklch, ACHROMATIC_CHROMA};
pub use rgb::Rgb;
pub use scheme::{ColorScheme, ParseSchemeError};
pub use token::ColorToken;

/// Round `value` to `places` decimals, half away from zero.
///
/// Negative zero is folded into positive zero so formatted output never
/// shows `-0.0000`.
pub fn round_to(value: f64, places: i32) -> f64 {
    if !value.is_finite() {
        return 0.0;
    }
    let factor = 10f64.powi(places);
    (value * factor).round() / factor + 0.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_to_half_away_from_zero() {
        assert_eq!(round_to(1.25, 1), 1.3);
        assert_eq!(round_to(-1.25, 1), -1.3);
        assert_eq!(round_to(2.5, 0), 3.0);
    }

    #[test]
    fn test_round_to_folds_negative_zero() {
        let r = round_to(-0.00001, 4);
        assert!(r.is_sign_positive());
        assert_eq!(format!("{r:.4}"), "0.0000");
    }

    #[test]
    fn test_round_to_non_finite() {
        assert_eq!(round_to(f64::NAN, 4), 0.0);
        assert_eq!(round_to(f64::INFINITY, 4), 0.0);
    }
}
