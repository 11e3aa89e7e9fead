//! Parser Configuration
//!
//! Reserved key names and the multi-value separator. Loaded from a TOML
//! string; missing fields fall back to the REST test format defaults:
//!
//! ```toml
//! catch_key = "catch"
//! body_key = "body"
//! param_separator = ","
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_CATCH_KEY: &str = "catch";
pub const DEFAULT_BODY_KEY: &str = "body";
pub const DEFAULT_PARAM_SEPARATOR: &str = ",";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to parse parser config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid parser config: {reason}")]
    Invalid { reason: String },
}

/// Step parser settings
///
/// Fields are private so a config only reaches a parser through
/// [`ParserConfig::new`], [`ParserConfig::from_toml_str`] or
/// `ActionStepParser::with_config`, which all validate it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    /// Top-level key holding the expected error
    catch_key: String,

    /// Key under the API call holding the payload
    body_key: String,

    /// Joins sequence-valued parameters
    param_separator: String,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            catch_key: DEFAULT_CATCH_KEY.to_string(),
            body_key: DEFAULT_BODY_KEY.to_string(),
            param_separator: DEFAULT_PARAM_SEPARATOR.to_string(),
        }
    }
}

impl ParserConfig {
    /// Build and validate a config from explicit values
    pub fn new(
        catch_key: impl Into<String>,
        body_key: impl Into<String>,
        param_separator: impl Into<String>,
    ) -> Result<Self, ConfigError> {
        let config = Self {
            catch_key: catch_key.into(),
            body_key: body_key.into(),
            param_separator: param_separator.into(),
        };
        config.validate()?;
        Ok(config)
    }

    pub fn catch_key(&self) -> &str {
        &self.catch_key
    }

    pub fn body_key(&self) -> &str {
        &self.body_key
    }

    pub fn param_separator(&self) -> &str {
        &self.param_separator
    }

    /// Load and validate configuration from TOML text
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Reserved keys must be non-empty and distinct
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.catch_key.is_empty() || self.body_key.is_empty() {
            return Err(ConfigError::Invalid {
                reason: "reserved key names must not be empty".to_string(),
            });
        }
        if self.catch_key == self.body_key {
            return Err(ConfigError::Invalid {
                reason: format!("catch_key and body_key are both '{}'", self.catch_key),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = ParserConfig::default();
        assert_eq!(config.catch_key(), "catch");
        assert_eq!(config.body_key(), "body");
        assert_eq!(config.param_separator(), ",");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn new_validates() {
        let config = ParserConfig::new("expect", "payload", "|").unwrap();
        assert_eq!(config.catch_key(), "expect");
        assert_eq!(config.body_key(), "payload");
        assert_eq!(config.param_separator(), "|");

        assert!(matches!(
            ParserConfig::new("body", "body", ","),
            Err(ConfigError::Invalid { .. })
        ));
        assert!(matches!(
            ParserConfig::new("catch", "", ","),
            Err(ConfigError::Invalid { .. })
        ));
    }

    #[test]
    fn empty_toml_is_default() {
        assert_eq!(ParserConfig::from_toml_str("").unwrap(), ParserConfig::default());
    }

    #[test]
    fn partial_toml_overrides() {
        let config = ParserConfig::from_toml_str("catch_key = \"expect\"").unwrap();
        assert_eq!(config.catch_key(), "expect");
        assert_eq!(config.body_key(), "body");
    }

    #[test]
    fn rejects_same_reserved_keys() {
        let err = ParserConfig::from_toml_str("catch_key = \"body\"").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { .. }));
    }

    #[test]
    fn rejects_empty_key() {
        let err = ParserConfig::from_toml_str("body_key = \"\"").unwrap_err();
        assert!(err.to_string().contains("must not be empty"));
    }

    #[test]
    fn rejects_bad_toml() {
        let err = ParserConfig::from_toml_str("catch_key = ").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
