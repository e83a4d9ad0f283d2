use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::limits::{DEFAULT_AUTO_INCREMENT_EXEMPT_ENGINE, DEFAULT_CHARSET};

/// Tunables for [`crate::validate::Validator`].
///
/// Missing fields in a config file fall back to [`ValidatorConfig::default`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidatorConfig {
    /// Charset assumed for VARCHAR columns without an explicit one.
    pub default_charset: String,
    /// Engines whose AUTO_INCREMENT column does not have to be a key.
    pub auto_increment_exempt_engines: Vec<String>,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            default_charset: DEFAULT_CHARSET.to_string(),
            auto_increment_exempt_engines: vec![DEFAULT_AUTO_INCREMENT_EXEMPT_ENGINE.to_string()],
        }
    }
}

impl ValidatorConfig {
    pub fn from_json_str(content: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(content)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    pub fn is_auto_increment_exempt(&self, engine: &str) -> bool {
        self.auto_increment_exempt_engines
            .iter()
            .any(|e| e.eq_ignore_ascii_case(engine))
    }
}
