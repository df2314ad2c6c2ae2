//! Application configuration with TOML file support.

use eduverify_counselor::CounselorConfig;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Read(String),

    #[error("failed to parse config file: {0}")]
    Parse(String),
}

/// Configuration for the EduVerify command line.
///
/// Can be loaded from a TOML file via [`AppConfig::from_toml_file`] or
/// built programmatically (e.g. for tests).
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AppConfig {
    /// Log level filter: "trace", "debug", "info", "warn", "error".
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Counselor service settings.
    #[serde(default)]
    pub counselor: CounselorConfig,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn from_toml_file(path: &std::path::Path) -> Result<Self, ConfigError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| ConfigError::Read(e.to_string()))?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        toml::from_str(s).map_err(|e| ConfigError::Parse(e.to_string()))
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            counselor: CounselorConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_uses_defaults() {
        let config = AppConfig::from_toml_str("").expect("empty toml should use defaults");
        assert_eq!(config.log_level, "info");
        assert_eq!(config.counselor.model, "gemini-3-flash-preview");
    }

    #[test]
    fn partial_toml_overrides() {
        let toml = r#"
            log_level = "debug"

            [counselor]
            model = "some-other-model"
        "#;
        let config = AppConfig::from_toml_str(toml).expect("should parse");
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.counselor.model, "some-other-model");
        assert!(config.counselor.api_key.is_empty()); // default
    }

    #[test]
    fn missing_file_returns_config_error() {
        let result = AppConfig::from_toml_file(std::path::Path::new("/nonexistent/eduverify.toml"));
        assert!(matches!(result, Err(ConfigError::Read(_))));
    }
}
