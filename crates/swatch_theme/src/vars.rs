//! Names of the non-color style variables and stylesheet fragments

pub const COLOR_SCHEME: &str = "color-scheme";

pub const FONT_SANS: &str = "--font-sans";
pub const FONT_SERIF: &str = "--font-serif";
pub const FONT_MONO: &str = "--font-mono";
pub const FONT_SIZE_BASE: &str = "--font-size-base";
pub const LINE_HEIGHT_BASE: &str = "--line-height-base";
pub const LETTER_SPACING: &str = "--letter-spacing";

pub const TYPOGRAPHY: [&str; 6] = [
    FONT_SANS,
    FONT_SERIF,
    FONT_MONO,
    FONT_SIZE_BASE,
    LINE_HEIGHT_BASE,
    LETTER_SPACING,
];

pub const RADIUS: &str = "--radius";
pub const RADIUS_BUTTON: &str = "--radius-button";
pub const RADIUS_CARD: &str = "--radius-card";
pub const RADIUS_INPUT: &str = "--radius-input";
pub const RADIUS_BADGE: &str = "--radius-badge";
pub const BORDER_WIDTH: &str = "--border-width";

pub const BORDERS: [&str; 6] = [
    RADIUS,
    RADIUS_BUTTON,
    RADIUS_CARD,
    RADIUS_INPUT,
    RADIUS_BADGE,
    BORDER_WIDTH,
];

pub const SPACING: &str = "--spacing";

pub const SCROLL_BEHAVIOR: &str = "--scroll-behavior";
pub const SCROLLBAR_WIDTH: &str = "--scrollbar-width";
pub const SCROLLBAR_RADIUS: &str = "--scrollbar-radius";

pub const SCROLL: [&str; 3] = [SCROLL_BEHAVIOR, SCROLLBAR_WIDTH, SCROLLBAR_RADIUS];

/// Stylesheet fragment holding the current scrollbar rules.
pub const SCROLLBAR_FRAGMENT: &str = "theme-scrollbar-styles";

/// Fragment id used by earlier releases; removed whenever scrollbar rules are written.
pub const LEGACY_SCROLLBAR_FRAGMENT: &str = "custom-scrollbar-styles";
