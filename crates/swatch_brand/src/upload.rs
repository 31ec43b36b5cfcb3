//! Upload validation: vector type check and aspect-ratio measurement

use std::path::Path;

use tracing::debug;

use crate::error::{BrandError, Result};
use crate::LogoType;

/// Default relative tolerance for aspect-ratio checks.
pub const DEFAULT_ASPECT_TOLERANCE: f64 = 0.1;

const SVG_MIME: &str = "image/svg+xml";

/// A file handed over by the host's file picker or drop zone.
#[derive(Clone, Debug)]
pub struct SvgUpload {
    pub file_name: String,
    pub mime_type: Option<String>,
    pub data: Vec<u8>,
}

impl SvgUpload {
    pub fn new(file_name: impl Into<String>, data: impl Into<Vec<u8>>) -> Self {
        Self {
            file_name: file_name.into(),
            mime_type: None,
            data: data.into(),
        }
    }

    pub fn with_mime_type(mut self, mime_type: impl Into<String>) -> Self {
        self.mime_type = Some(mime_type.into());
        self
    }

    /// File name without directory or extension, used as the logo's display name.
    pub fn stem(&self) -> String {
        Path::new(&self.file_name)
            .file_stem()
            .and_then(|stem| stem.to_str())
            .filter(|stem| !stem.is_empty())
            .unwrap_or("logo")
            .to_string()
    }
}

/// Accept only SVG markup, returning it as text.
///
/// The declared type (MIME type when given, otherwise the file extension)
/// must be SVG, the bytes must be UTF-8 containing an `<svg` element, and the
/// markup must parse.
pub fn validate_vector(upload: &SvgUpload) -> Result<String> {
    let not_vector = || BrandError::NotVector {
        file_name: upload.file_name.clone(),
    };

    let declared_svg = match &upload.mime_type {
        Some(mime) => mime.trim().eq_ignore_ascii_case(SVG_MIME),
        None => Path::new(&upload.file_name)
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("svg")),
    };
    if !declared_svg {
        return Err(not_vector());
    }

    let markup = std::str::from_utf8(&upload.data).map_err(|_| not_vector())?;
    if !markup.to_ascii_lowercase().contains("<svg") {
        return Err(not_vector());
    }

    parse_tree(markup)?;
    debug!(file = %upload.file_name, bytes = upload.data.len(), "accepted vector upload");
    Ok(markup.to_string())
}

/// Width over height of the rendered markup.
pub fn measure_aspect_ratio(markup: &str) -> Result<f64> {
    let tree = parse_tree(markup)?;
    let size = tree.size();
    let (width, height) = (f64::from(size.width()), f64::from(size.height()));
    if width <= 0.0 || height <= 0.0 {
        return Err(BrandError::Unreadable {
            reason: format!("degenerate size {width}x{height}"),
        });
    }
    Ok(width / height)
}

/// Check that `markup` is shaped like `logo_type` within a relative `tolerance`.
pub fn check_aspect_ratio(markup: &str, logo_type: LogoType, tolerance: f64) -> Result<f64> {
    let actual = measure_aspect_ratio(markup)?;
    let expected = logo_type.aspect_ratio();
    if (actual / expected - 1.0).abs() > tolerance {
        return Err(BrandError::AspectRatio {
            logo_type,
            expected,
            actual,
        });
    }
    Ok(actual)
}

fn parse_tree(markup: &str) -> Result<usvg::Tree> {
    usvg::Tree::from_str(markup, &usvg::Options::default()).map_err(|err| {
        BrandError::Unreadable {
            reason: err.to_string(),
        }
    })
}
