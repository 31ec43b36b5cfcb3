//! The set of logos belonging to one theme

use serde::{Deserialize, Serialize};
use swatch_color::ColorScheme;
use tracing::{debug, info};

use crate::error::{BrandError, Result};
use crate::logo::{LogoType, LogoVariant};
use crate::upload::SvgUpload;

/// Brand assets stored alongside a theme.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct BrandAssets {
    #[serde(default)]
    logos: Vec<LogoVariant>,
}

impl BrandAssets {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate an upload and add it, linked to `primary` in both modes.
    ///
    /// Nothing is added on failure.
    pub fn add_from_upload(
        &mut self,
        upload: &SvgUpload,
        logo_type: LogoType,
        primary: &str,
    ) -> Result<&LogoVariant> {
        let logo = LogoVariant::from_upload(upload, logo_type, primary)?;
        Ok(self.insert(logo))
    }

    /// Add a logo, suffixing its id if it collides with an existing one.
    pub fn insert(&mut self, mut logo: LogoVariant) -> &LogoVariant {
        if self.get(logo.id()).is_some() {
            let base = logo.id().to_string();
            let mut n = 2;
            while self.get(&format!("{base}-{n}")).is_some() {
                n += 1;
            }
            logo.set_id(format!("{base}-{n}"));
        }
        info!(id = logo.id(), name = logo.name(), "added logo");
        let index = self.logos.len();
        self.logos.push(logo);
        &self.logos[index]
    }

    pub fn get(&self, id: &str) -> Option<&LogoVariant> {
        self.logos.iter().find(|logo| logo.id() == id)
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut LogoVariant> {
        self.logos.iter_mut().find(|logo| logo.id() == id)
    }

    /// Look up a logo for editing, failing with [`BrandError::LogoNotFound`].
    pub fn require_mut(&mut self, id: &str) -> Result<&mut LogoVariant> {
        self.get_mut(id)
            .ok_or_else(|| BrandError::LogoNotFound(id.to_string()))
    }

    pub fn remove(&mut self, id: &str) -> Result<LogoVariant> {
        let index = self
            .logos
            .iter()
            .position(|logo| logo.id() == id)
            .ok_or_else(|| BrandError::LogoNotFound(id.to_string()))?;
        Ok(self.logos.remove(index))
    }

    /// Replace a color in one logo's base markup.
    pub fn replace_color(&mut self, id: &str, target: &str, replacement: &str) -> Result<()> {
        self.require_mut(id)?.replace_color(target, replacement)
    }

    /// Replace a color in one logo's dark-mode version.
    pub fn replace_dark_version_color(
        &mut self,
        id: &str,
        target: &str,
        replacement: &str,
    ) -> Result<()> {
        self.require_mut(id)?.replace_dark_version_color(target, replacement)
    }

    pub fn logos(&self) -> &[LogoVariant] {
        &self.logos
    }

    pub fn len(&self) -> usize {
        self.logos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.logos.is_empty()
    }

    /// Propagate a new primary color in `scheme` to every linked logo.
    ///
    /// Returns how many logos were re-derived.
    pub fn on_primary_changed(&mut self, scheme: ColorScheme, primary: &str) -> usize {
        let updated = self
            .logos
            .iter_mut()
            .map(|logo| logo.track_primary(scheme, primary))
            .filter(|changed| *changed)
            .count();
        if updated > 0 {
            debug!(%scheme, primary, updated, "propagated primary color to logos");
        }
        updated
    }

    /// Feed the current primary color through `watch`, propagating it only
    /// when it differs from the last value observed for `scheme`.
    pub fn observe_primary(
        &mut self,
        watch: &mut PrimaryWatch,
        scheme: ColorScheme,
        primary: &str,
    ) -> usize {
        if watch.observe(scheme, primary) {
            self.on_primary_changed(scheme, primary)
        } else {
            0
        }
    }

    /// Re-derive every logo's variants after loading from storage.
    pub fn refresh(&mut self) {
        for logo in &mut self.logos {
            logo.refresh_variants();
        }
    }
}

/// Last primary color seen per mode, so repeated notifications with an
/// unchanged value are ignored.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PrimaryWatch {
    light: Option<String>,
    dark: Option<String>,
}

impl PrimaryWatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `primary` for `scheme`; returns whether it changed.
    pub fn observe(&mut self, scheme: ColorScheme, primary: &str) -> bool {
        let slot = match scheme {
            ColorScheme::Light => &mut self.light,
            ColorScheme::Dark => &mut self.dark,
        };
        if slot.as_deref() == Some(primary) {
            return false;
        }
        *slot = Some(primary.to_string());
        true
    }

    pub fn last(&self, scheme: ColorScheme) -> Option<&str> {
        match scheme {
            ColorScheme::Light => self.light.as_deref(),
            ColorScheme::Dark => self.dark.as_deref(),
        }
    }
}
