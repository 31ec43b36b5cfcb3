//! OKLCH perceptual color model

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{round_to, Rgb};

/// Chroma below which a color is treated as achromatic (hue is meaningless).
pub const ACHROMATIC_CHROMA: f64 = 1e-4;

/// Decimal places kept for every OKLCH component.
const PRECISION: i32 = 4;

/// A color in the OKLCH model.
///
/// `l` is lightness in `0..=1`, `c` is chroma (`>= 0`, practically below
/// `0.4`) and `h` is hue in degrees `0..360`. Values outside those ranges are
/// carried through arithmetically rather than rejected.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Oklch {
    pub l: f64,
    pub c: f64,
    pub h: f64,
}

impl Oklch {
    pub const fn new(l: f64, c: f64, h: f64) -> Self {
        Self { l, c, h }
    }

    /// Round every component to 4 decimals and wrap the hue into `0..360`.
    pub fn rounded(self) -> Self {
        let mut h = round_to(self.h.rem_euclid(360.0), PRECISION);
        if h >= 360.0 {
            h = 0.0;
        }
        Self {
            l: round_to(self.l, PRECISION),
            c: round_to(self.c, PRECISION),
            h,
        }
    }

    /// Whether the chroma is too small for the hue to carry information.
    pub fn is_achromatic(&self) -> bool {
        self.c.abs() < ACHROMATIC_CHROMA
    }

    /// Parse `oklch(L C H)`.
    ///
    /// Whitespace between and around components is free-form; commas are
    /// tolerated as separators. A fourth component (alpha) is ignored. Returns
    /// `None` when fewer than three components are present or any of the
    /// first three is not a finite number.
    pub fn parse(text: &str) -> Option<Self> {
        let trimmed = text.trim();
        let open = trimmed.find('(')?;
        if !trimmed[..open].trim().eq_ignore_ascii_case("oklch") {
            return None;
        }

        let body = &trimmed[open + 1..];
        let body = body.strip_suffix(')').unwrap_or(body);

        let mut parts = body
            .split(|ch: char| ch.is_whitespace() || ch == ',')
            .filter(|part| !part.is_empty());

        let l = parse_component(parts.next()?)?;
        let c = parse_component(parts.next()?)?;
        let h = parse_component(parts.next()?)?;
        Some(Self { l, c, h })
    }

    /// Convert to 8-bit sRGB, clamping out-of-gamut channels.
    pub fn to_rgb(&self) -> Rgb {
        let (r, g, b) = oklab_to_linear_srgb(self.to_oklab());
        Rgb::new(encode_channel(r), encode_channel(g), encode_channel(b))
    }

    /// Convert to a lowercase `#rrggbb` string.
    pub fn to_hex(&self) -> String {
        self.to_rgb().to_hex()
    }

    /// Convert from 8-bit sRGB. The result is rounded to 4 decimals and an
    /// achromatic input gets hue `0`.
    pub fn from_rgb(rgb: Rgb) -> Self {
        let linear = (
            decode_channel(rgb.r),
            decode_channel(rgb.g),
            decode_channel(rgb.b),
        );
        let (l, a, b) = linear_srgb_to_oklab(linear);
        let c = (a * a + b * b).sqrt();
        let h = if c < ACHROMATIC_CHROMA {
            0.0
        } else {
            b.atan2(a).to_degrees()
        };
        Self { l, c, h }.rounded()
    }

    fn to_oklab(self) -> (f64, f64, f64) {
        let h = if self.h.is_finite() {
            self.h.to_radians()
        } else {
            0.0
        };
        (self.l, self.c * h.cos(), self.c * h.sin())
    }
}

impl fmt::Display for Oklch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rounded = self.rounded();
        write!(
            f,
            "oklch({:.4} {:.4} {:.4})",
            rounded.l, rounded.c, rounded.h
        )
    }
}

fn parse_component(text: &str) -> Option<f64> {
    text.parse::<f64>().ok().filter(|value| value.is_finite())
}

// Matrices from https://bottosson.github.io/posts/oklab/

fn oklab_to_linear_srgb((l, a, b): (f64, f64, f64)) -> (f64, f64, f64) {
    let l_ = l + 0.396_337_777_4 * a + 0.215_803_757_3 * b;
    let m_ = l - 0.105_561_345_8 * a - 0.063_854_172_8 * b;
    let s_ = l - 0.089_484_177_5 * a - 1.291_485_548_0 * b;

    let l = l_ * l_ * l_;
    let m = m_ * m_ * m_;
    let s = s_ * s_ * s_;

    (
        4.076_741_662_1 * l - 3.307_711_591_3 * m + 0.230_969_929_2 * s,
        -1.268_438_004_6 * l + 2.609_757_401_1 * m - 0.341_319_396_5 * s,
        -0.004_196_086_3 * l - 0.703_418_614_7 * m + 1.707_614_701_0 * s,
    )
}

fn linear_srgb_to_oklab((r, g, b): (f64, f64, f64)) -> (f64, f64, f64) {
    let l = (0.412_221_470_8 * r + 0.536_332_536_3 * g + 0.051_445_992_9 * b).cbrt();
    let m = (0.211_903_498_2 * r + 0.680_699_545_1 * g + 0.107_396_956_6 * b).cbrt();
    let s = (0.088_302_461_9 * r + 0.281_718_837_6 * g + 0.629_978_700_5 * b).cbrt();

    (
        0.210_454_255_3 * l + 0.793_617_785_0 * m - 0.004_072_046_8 * s,
        1.977_998_495_1 * l - 2.428_592_205_0 * m + 0.450_593_709_9 * s,
        0.025_904_037_1 * l + 0.782_771_766_2 * m - 0.808_675_766_0 * s,
    )
}

// sRGB transfer function (IEC 61966-2-1)

fn decode_channel(channel: u8) -> f64 {
    let srgb = f64::from(channel) / 255.0;
    if srgb <= 0.040_45 {
        srgb / 12.92
    } else {
        ((srgb + 0.055) / 1.055).powf(2.4)
    }
}

fn encode_channel(linear: f64) -> u8 {
    let linear = if linear.is_finite() {
        linear.clamp(0.0, 1.0)
    } else {
        0.0
    };
    let srgb = if linear <= 0.003_130_8 {
        12.92 * linear
    } else {
        1.055 * linear.powf(1.0 / 2.4) - 0.055
    };
    (srgb * 255.0).round().clamp(0.0, 255.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_four_decimals() {
        let color = Oklch::new(0.5, 0.1, 180.0);
        assert_eq!(color.to_string(), "oklch(0.5000 0.1000 180.0000)");
    }

    #[test]
    fn test_display_wraps_hue() {
        assert_eq!(
            Oklch::new(0.5, 0.1, 360.0).to_string(),
            "oklch(0.5000 0.1000 0.0000)"
        );
        assert_eq!(
            Oklch::new(0.5, 0.1, -90.0).to_string(),
            "oklch(0.5000 0.1000 270.0000)"
        );
    }

    #[test]
    fn test_parse_free_whitespace() {
        let parsed = Oklch::parse("  oklch(   0.5\t0.1   180 ) ").unwrap();
        assert_eq!(parsed, Oklch::new(0.5, 0.1, 180.0));
    }

    #[test]
    fn test_parse_ignores_alpha() {
        let parsed = Oklch::parse("oklch(0.7 0.2 30 / 0.5)").unwrap();
        assert_eq!(parsed, Oklch::new(0.7, 0.2, 30.0));
    }

    #[test]
    fn test_parse_rejects_short_and_garbage() {
        assert_eq!(Oklch::parse("oklch(0.5 0.1)"), None);
        assert_eq!(Oklch::parse("oklch(0.5 abc 180)"), None);
        assert_eq!(Oklch::parse("oklch(NaN 0.1 180)"), None);
        assert_eq!(Oklch::parse("rgb(1 2 3)"), None);
        assert_eq!(Oklch::parse(""), None);
    }

    #[test]
    fn test_primaries() {
        assert_eq!(Oklch::new(1.0, 0.0, 0.0).to_rgb(), Rgb::new(255, 255, 255));
        assert_eq!(Oklch::new(0.0, 0.0, 0.0).to_rgb(), Rgb::new(0, 0, 0));

        let red = Oklch::from_rgb(Rgb::new(255, 0, 0));
        assert!((red.l - 0.628).abs() < 1e-3);
        assert!((red.c - 0.2577).abs() < 1e-3);
        assert!((red.h - 29.23).abs() < 0.1);
    }

    #[test]
    fn test_achromatic_has_zero_hue() {
        let gray = Oklch::from_rgb(Rgb::new(128, 128, 128));
        assert!(gray.is_achromatic());
        assert_eq!(gray.h, 0.0);
        assert!(!gray.h.is_nan());
    }

    #[test]
    fn test_out_of_range_is_clamped() {
        let over = Oklch::new(1.5, 0.5, 120.0).to_rgb();
        let under = Oklch::new(-0.5, 0.0, 0.0).to_rgb();
        assert_eq!(under, Rgb::new(0, 0, 0));
        assert_eq!(over.g, 255);
    }
}
