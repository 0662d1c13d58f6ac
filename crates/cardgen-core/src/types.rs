//! Core types for CardGen

use serde::{Deserialize, Serialize};

pub mod design;
pub mod logo;

pub use design::{CardStyle, ContactField, ContactInfo, DesignRecord, Template};
pub use logo::LogoImage;

/// Identifier of a saved design.
///
/// Ids are epoch milliseconds taken at save time, so they sort in save order.
/// Serialized as a bare JSON number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DesignId(pub i64);

impl DesignId {
    pub fn from_millis(millis: i64) -> Self {
        Self(millis)
    }

    pub fn as_millis(&self) -> i64 {
        self.0
    }

    /// Compare against an id that arrived as text (URL query, CLI flag).
    ///
    /// Loose: surrounding whitespace is ignored and integral float forms
    /// such as `"1700000000000.0"` match too.
    pub fn matches_loose(&self, raw: &str) -> bool {
        let raw = raw.trim();
        if let Ok(n) = raw.parse::<i64>() {
            return n == self.0;
        }
        match raw.parse::<f64>() {
            Ok(f) if f.is_finite() && f.fract() == 0.0 => f == self.0 as f64,
            _ => false,
        }
    }
}

/// UI colour scheme, independent of any card design
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }

    /// Unrecognised values read as `Light`
    pub fn parse(value: &str) -> Self {
        match value {
            "dark" => ThemeMode::Dark,
            _ => ThemeMode::Light,
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }
}

impl std::fmt::Display for DesignId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_design_id_display() {
        assert_eq!(DesignId(1700000000123).to_string(), "1700000000123");
    }

    #[test]
    fn test_design_id_serializes_as_number() {
        let json = serde_json::to_string(&DesignId(42)).unwrap();
        assert_eq!(json, "42");
        let back: DesignId = serde_json::from_str("42").unwrap();
        assert_eq!(back, DesignId(42));
    }

    #[test]
    fn test_theme_mode_parse() {
        assert_eq!(ThemeMode::parse("dark"), ThemeMode::Dark);
        assert_eq!(ThemeMode::parse("light"), ThemeMode::Light);
        assert_eq!(ThemeMode::parse(""), ThemeMode::Light);
        assert_eq!(ThemeMode::Dark.toggled(), ThemeMode::Light);
    }

    #[test]
    fn test_loose_match() {
        let id = DesignId(1700000000123);
        assert!(id.matches_loose("1700000000123"));
        assert!(id.matches_loose(" 1700000000123 "));
        assert!(id.matches_loose("1700000000123.0"));
        assert!(!id.matches_loose("1700000000124"));
        assert!(!id.matches_loose("abc"));
        assert!(!id.matches_loose(""));
        assert!(!id.matches_loose("1700000000123.5"));
    }
}
