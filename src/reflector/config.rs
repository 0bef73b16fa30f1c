//! Reflector configuration.

use serde::Deserialize;

use super::CaseSensitivity;

/// Default name comparison rule.
pub const DEFAULT_CASE_SENSITIVITY: CaseSensitivity = CaseSensitivity::Insensitive;

/// Configuration for a [`Reflector`](super::Reflector).
///
/// Deserializable so it can sit inside a host application's own config:
///
/// ```
/// use argreflect::{CaseSensitivity, ReflectorConfig};
///
/// let config: ReflectorConfig =
///     serde_json::from_str(r#"{ "case_sensitivity": "sensitive" }"#).unwrap();
/// assert_eq!(config.case_sensitivity, CaseSensitivity::Sensitive);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ReflectorConfig {
    /// How property names are compared with handler names.
    ///
    /// Default: insensitive
    pub case_sensitivity: CaseSensitivity,
}

impl ReflectorConfig {
    /// Create a config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether names must match exactly.
    pub fn case_sensitive(mut self, case_sensitive: bool) -> Self {
        self.case_sensitivity = case_sensitive.into();
        self
    }
}

impl Default for ReflectorConfig {
    fn default() -> Self {
        Self {
            case_sensitivity: DEFAULT_CASE_SENSITIVITY,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ReflectorConfig::default();
        assert_eq!(config.case_sensitivity, CaseSensitivity::Insensitive);
        assert_eq!(ReflectorConfig::new(), config);
    }

    #[test]
    fn test_case_sensitive_setter() {
        let config = ReflectorConfig::new().case_sensitive(true);
        assert_eq!(config.case_sensitivity, CaseSensitivity::Sensitive);

        let config = config.case_sensitive(false);
        assert_eq!(config.case_sensitivity, CaseSensitivity::Insensitive);
    }

    #[test]
    fn test_deserialize_missing_fields_use_defaults() {
        let config: ReflectorConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, ReflectorConfig::default());
    }

    #[test]
    fn test_deserialize_lowercase_variants() {
        let config: ReflectorConfig =
            serde_json::from_str(r#"{ "case_sensitivity": "insensitive" }"#).unwrap();
        assert_eq!(config.case_sensitivity, CaseSensitivity::Insensitive);

        let bad = serde_json::from_str::<ReflectorConfig>(r#"{ "case_sensitivity": "Upper" }"#);
        assert!(bad.is_err());
    }
}
