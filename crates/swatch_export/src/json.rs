//! Structured-data dump

use swatch_theme::ThemeData;

use crate::error::Result;

/// Pretty JSON of the whole theme; loads back with [`ThemeData::from_json`].
pub fn generate_json(theme: &ThemeData) -> Result<String> {
    Ok(serde_json::to_string_pretty(theme)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trips_through_loader() {
        let theme = ThemeData::default();
        let json = generate_json(&theme).unwrap();
        assert_eq!(ThemeData::from_json(&json).unwrap(), theme);
    }

    #[test]
    fn test_uses_record_field_names() {
        let json = generate_json(&ThemeData::default()).unwrap();
        assert!(json.contains("\"lightColors\""));
        assert!(json.contains("\"oklchString\""));
    }
}
