//! Swatch Brand Assets
//!
//! Ingests SVG logos and keeps their recolored variants consistent with the
//! theme they belong to.
//!
//! # Overview
//!
//! - **Detection**: every distinct color literal in the markup, in first-seen order
//! - **Recoloring**: exact whole-token substitution, case-insensitive
//! - **Variants**: original, white, black, gray and mono silhouettes per display mode
//! - **Mode independence**: light and dark configurations never affect each other
//! - **Primary linkage**: a mode's mono color follows the theme primary until set by hand
//!
//! # Example
//!
//! ```rust,ignore
//! use swatch_brand::{BrandAssets, LogoType, SvgUpload};
//! use swatch_color::ColorScheme;
//!
//! let mut assets = BrandAssets::new();
//! let upload = SvgUpload::new("acme.svg", std::fs::read("acme.svg")?);
//! let id = assets.add_from_upload(&upload, LogoType::Icon, "#1e66f5")?.id().to_string();
//!
//! // Only the dark mode changes
//! assets.require_mut(&id)?.set_mono_color(ColorScheme::Dark, "#eff1f5");
//! ```

pub mod error;
pub mod library;
pub mod literal;
pub mod logo;
pub mod upload;
pub mod variants;

pub use error::{BrandError, Result};
pub use library::{BrandAssets, PrimaryWatch};
pub use literal::{
    detect_colors_from_svg, normalize_literal, replace_color_in_svg, substitute_colors,
    to_hex_literal, BLACK, WHITE,
};
pub use logo::{
    DarkModeVersion, LogoModeConfig, LogoType, LogoVariant, MonoColor, ParseLogoTypeError,
};
pub use upload::{
    check_aspect_ratio, measure_aspect_ratio, validate_vector, SvgUpload,
    DEFAULT_ASPECT_TOLERANCE,
};
pub use variants::{generate_color_variants, resolve_mono_color, ColorVariants, GRAY};
