//! Color tokens keyed by semantic role

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use swatch_color::ColorToken;

use crate::roles::{ColorRole, ROLE_TABLE};

/// Colors for one display mode, keyed by role key (`primary`, `scrollbarTrack`, ...).
///
/// Any role may be absent. Keys that are not in the role table are kept so a
/// stored record round-trips, but they are never published.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ThemeColors(IndexMap<String, ColorToken>);

impl ThemeColors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, role: ColorRole) -> Option<&ColorToken> {
        self.0.get(role.key())
    }

    pub fn get_mut(&mut self, role: ColorRole) -> Option<&mut ColorToken> {
        self.0.get_mut(role.key())
    }

    /// Set a role's token, returning the one it replaced.
    pub fn set(&mut self, role: ColorRole, token: ColorToken) -> Option<ColorToken> {
        self.0.insert(role.key().to_string(), token)
    }

    pub fn insert(&mut self, key: impl Into<String>, token: ColorToken) -> Option<ColorToken> {
        self.0.insert(key.into(), token)
    }

    pub fn remove(&mut self, role: ColorRole) -> Option<ColorToken> {
        self.0.shift_remove(role.key())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Stored entries in insertion order, published or not.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ColorToken)> {
        self.0.iter().map(|(key, token)| (key.as_str(), token))
    }

    /// Present roles in role-table order.
    pub fn published(&self) -> impl Iterator<Item = (ColorRole, &ColorToken)> {
        ROLE_TABLE
            .iter()
            .filter_map(|binding| self.0.get(binding.key).map(|token| (binding.role, token)))
    }
}

impl FromIterator<(ColorRole, ColorToken)> for ThemeColors {
    fn from_iter<I: IntoIterator<Item = (ColorRole, ColorToken)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(role, token)| (role.key().to_string(), token))
                .collect(),
        )
    }
}
