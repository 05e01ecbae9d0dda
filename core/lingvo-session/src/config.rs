use std::fs;
use std::path::Path;

use lingvo_protocol::Language;
use serde::{Deserialize, Serialize};

use crate::error::Result;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Rule table used until the caller switches language.
    pub default_language: Language,
    /// Oldest history entries are evicted past this many.
    pub history_capacity: usize,
    /// Entries returned by a history listing when no limit is given.
    pub history_limit: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            default_language: Language::Fr,
            history_capacity: 50,
            history_limit: 10,
        }
    }
}

impl SessionConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let json = fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SessionError;

    #[test]
    fn test_missing_fields_use_defaults() {
        let config = SessionConfig::from_json_str(r#"{"default_language": "en"}"#).unwrap();
        assert_eq!(config.default_language, Language::En);
        assert_eq!(config.history_capacity, 50);
        assert_eq!(config.history_limit, 10);
    }

    #[test]
    fn test_unknown_language_is_a_config_error() {
        let err = SessionConfig::from_json_str(r#"{"default_language": "de"}"#).unwrap_err();
        assert!(matches!(err, SessionError::Config(_)));
    }
}
