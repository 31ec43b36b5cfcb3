//! Swatch Theme Model
//!
//! Theme data for both display modes and its projection onto a live style
//! root.
//!
//! # Overview
//!
//! - [`ThemeData`]: light and dark [`ThemeColors`], typography, borders,
//!   spacing, shadows, scroll settings and brand assets
//! - [`ROLE_TABLE`]: the versioned mapping from semantic color roles to style
//!   variable names
//! - [`StyleRoot`]: the in-memory style root, process-global or local
//! - [`sync`]: entry points that write theme data into any [`StyleSink`]
//!
//! # Quick Start
//!
//! ```rust
//! use swatch_color::ColorScheme;
//! use swatch_theme::{sync, StyleRoot, ThemeData};
//!
//! let root = StyleRoot::new();
//! let theme = ThemeData::default();
//!
//! sync::apply_theme_to_root(&root, &theme, ColorScheme::Dark);
//! assert_eq!(root.property("color-scheme").as_deref(), Some("dark"));
//!
//! sync::reset_theme_variables(&root);
//! assert_eq!(root.property_count(), 0);
//! ```

pub mod colors;
pub mod error;
pub mod presets;
pub mod roles;
pub mod root;
pub mod sync;
pub mod theme;
pub mod tokens;
pub mod vars;

pub use colors::ThemeColors;
pub use error::{Result, ThemeError};
pub use presets::{ParsePresetError, ThemePreset};
pub use roles::{kebab_case, variable_name, ColorRole, RoleBinding, ROLE_TABLE, ROLE_TABLE_VERSION};
pub use root::{StyleBatch, StyleOp, StyleRoot, StyleSink, StyleSnapshot};
pub use theme::ThemeData;
pub use tokens::{
    css_length, css_number, Borders, ScrollBehavior, ScrollConfig, Shadow, ShadowElevation,
    Shadows, Spacing, Typography,
};
