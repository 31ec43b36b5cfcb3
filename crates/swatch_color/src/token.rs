//! A named color carrying every representation at once

use serde::{Deserialize, Serialize};

use crate::{round_to, ColorFormat, Hsv, Oklch, Rgb};

/// One named color value.
///
/// All four representations describe the same visible color. Editing any of
/// them through a `set_*` method recomputes the others from the edited one.
/// `oklch_string` is the precision source of truth; `value` is the plain CSS
/// value older records carry and is used only when `oklch_string` is absent.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorToken {
    pub name: String,
    pub hex: String,
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub oklch_string: Option<String>,
    pub oklch: Oklch,
    pub rgb: Rgb,
    pub hsv: Hsv,
}

impl ColorToken {
    pub fn from_oklch(name: impl Into<String>, oklch: Oklch) -> Self {
        let mut token = Self::blank(name.into());
        token.set_oklch(oklch);
        token
    }

    pub fn from_rgb(name: impl Into<String>, rgb: Rgb) -> Self {
        let mut token = Self::blank(name.into());
        token.set_rgb(rgb);
        token
    }

    /// Build from `#rrggbb`/`#rgb`; `None` if the text is not a hex color.
    pub fn from_hex(name: impl Into<String>, hex: &str) -> Option<Self> {
        Rgb::from_hex(hex).map(|rgb| Self::from_rgb(name, rgb))
    }

    /// Build from `oklch(...)` or hex text, whichever parses.
    pub fn parse(name: impl Into<String>, text: &str) -> Option<Self> {
        match Oklch::parse(text) {
            Some(oklch) => Some(Self::from_oklch(name, oklch)),
            None => Self::from_hex(name, text),
        }
    }

    fn blank(name: String) -> Self {
        Self {
            name,
            hex: String::new(),
            value: String::new(),
            oklch_string: None,
            oklch: Oklch::default(),
            rgb: Rgb::default(),
            hsv: Hsv::default(),
        }
    }

    /// The value written into style variables.
    pub fn css_value(&self) -> &str {
        self.oklch_string.as_deref().unwrap_or(&self.value)
    }

    /// Render in the requested export format.
    pub fn format(&self, format: ColorFormat) -> String {
        match format {
            ColorFormat::Oklch => self
                .oklch_string
                .clone()
                .unwrap_or_else(|| self.oklch.to_string()),
            ColorFormat::Hex => self.hex.clone(),
            ColorFormat::Rgb => self.rgb.to_css(),
        }
    }

    pub fn set_oklch(&mut self, oklch: Oklch) {
        let oklch = oklch.rounded();
        let formatted = oklch.to_string();
        self.oklch = oklch;
        self.rgb = oklch.to_rgb();
        self.hex = self.rgb.to_hex();
        self.hsv = Hsv::from_rgb(self.rgb);
        self.value = formatted.clone();
        self.oklch_string = Some(formatted);
    }

    /// Apply a hex edit. Returns `false` and leaves the token untouched when
    /// the text does not parse.
    pub fn set_hex(&mut self, hex: &str) -> bool {
        match Rgb::from_hex(hex) {
            Some(rgb) => {
                self.set_rgb(rgb);
                true
            }
            None => false,
        }
    }

    pub fn set_rgb(&mut self, rgb: Rgb) {
        let hsv = Hsv::from_rgb(rgb);
        self.store_from_rgb(rgb, hsv);
    }

    pub fn set_hsv(&mut self, hsv: Hsv) {
        let mut hsv = Hsv::new(round_to(hsv.h, 2), round_to(hsv.s, 2), round_to(hsv.v, 2));
        if hsv.s == 0.0 {
            // A gray has no hue of its own; keep the picker's hue handle put.
            hsv.h = self.hsv.h;
        }
        self.store_from_rgb(hsv.to_rgb(), hsv);
    }

    fn store_from_rgb(&mut self, rgb: Rgb, hsv: Hsv) {
        let mut oklch = Oklch::from_rgb(rgb);
        if oklch.is_achromatic() {
            oklch.h = self.oklch.h;
        }
        let formatted = oklch.to_string();
        self.rgb = rgb;
        self.hex = rgb.to_hex();
        self.hsv = hsv;
        self.oklch = oklch;
        self.value = formatted.clone();
        self.oklch_string = Some(formatted);
    }
}
