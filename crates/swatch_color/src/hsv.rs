//! Hue/saturation/value, the model color pickers drag through

use serde::{Deserialize, Serialize};

use crate::{round_to, Rgb};

/// A color in the HSV model.
///
/// `h` is hue in degrees `0..360`, `s` and `v` are percentages `0..=100`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Hsv {
    pub h: f64,
    pub s: f64,
    pub v: f64,
}

impl Hsv {
    pub const fn new(h: f64, s: f64, v: f64) -> Self {
        Self { h, s, v }
    }

    pub fn from_rgb(rgb: Rgb) -> Self {
        let r = f64::from(rgb.r) / 255.0;
        let g = f64::from(rgb.g) / 255.0;
        let b = f64::from(rgb.b) / 255.0;

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let delta = max - min;

        let h = if delta == 0.0 {
            0.0
        } else if max == r {
            60.0 * ((g - b) / delta).rem_euclid(6.0)
        } else if max == g {
            60.0 * ((b - r) / delta + 2.0)
        } else {
            60.0 * ((r - g) / delta + 4.0)
        };
        let s = if max == 0.0 { 0.0 } else { delta / max };

        Self {
            h: round_to(h, 2),
            s: round_to(s * 100.0, 2),
            v: round_to(max * 100.0, 2),
        }
    }

    pub fn to_rgb(&self) -> Rgb {
        let h = if self.h.is_finite() {
            self.h.rem_euclid(360.0)
        } else {
            0.0
        };
        let s = finite_percent(self.s);
        let v = finite_percent(self.v);

        let chroma = v * s;
        let x = chroma * (1.0 - ((h / 60.0).rem_euclid(2.0) - 1.0).abs());
        let m = v - chroma;

        let (r, g, b) = match (h / 60.0) as u32 {
            0 => (chroma, x, 0.0),
            1 => (x, chroma, 0.0),
            2 => (0.0, chroma, x),
            3 => (0.0, x, chroma),
            4 => (x, 0.0, chroma),
            _ => (chroma, 0.0, x),
        };

        Rgb::new(to_channel(r + m), to_channel(g + m), to_channel(b + m))
    }
}

fn finite_percent(value: f64) -> f64 {
    if value.is_finite() {
        (value / 100.0).clamp(0.0, 1.0)
    } else {
        0.0
    }
}

fn to_channel(value: f64) -> u8 {
    (value * 255.0).round().clamp(0.0, 255.0) as u8
}
