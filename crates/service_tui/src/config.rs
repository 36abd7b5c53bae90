//! Blotter configuration management.
//!
//! Handles loading and management of blotter configuration from TOML files
//! with environment variable override support.

use serde::Deserialize;
use std::path::Path;

/// Blotter configuration
#[derive(Debug, Clone, Deserialize)]
pub struct BlotterConfig {
    /// Trade feed base URL
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Log level used when file logging is enabled
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Event loop tick interval in milliseconds
    #[serde(default = "default_tick_millis")]
    pub tick_millis: u64,
}

fn default_endpoint() -> String {
    "http://localhost:8080".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_tick_millis() -> u64 {
    100
}

impl Default for BlotterConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            log_level: default_log_level(),
            tick_millis: default_tick_millis(),
        }
    }
}

impl BlotterConfig {
    /// Load configuration from a file, falling back to defaults when the
    /// file does not exist. A file that exists but does not parse is still
    /// an error.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string())),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(ConfigError::Io(e.to_string())),
        }
    }

    /// Apply environment variable overrides
    pub fn with_env_override(mut self) -> Self {
        if let Ok(endpoint) = std::env::var("FXBLOTTER_ENDPOINT") {
            self.endpoint = endpoint;
        }

        if let Ok(log_level) = std::env::var("FXBLOTTER_LOG_LEVEL") {
            self.log_level = log_level;
        }

        if let Ok(tick) = std::env::var("FXBLOTTER_TICK_MILLIS") {
            if let Ok(millis) = tick.parse() {
                self.tick_millis = millis;
            }
        }

        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut errors = Vec::new();

        // Validate log level
        let valid_log_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_log_levels.contains(&self.log_level.to_lowercase().as_str()) {
            errors.push(format!(
                "Invalid log_level '{}'. Valid values: {:?}",
                self.log_level, valid_log_levels
            ));
        }

        // Validate endpoint format
        if !self.endpoint.starts_with("http://") && !self.endpoint.starts_with("https://") {
            errors.push(format!(
                "Invalid endpoint '{}'. Must start with http:// or https://",
                self.endpoint
            ));
        }

        // Validate tick interval range
        if self.tick_millis == 0 {
            errors.push("tick_millis must be greater than 0".to_string());
        }
        if self.tick_millis > 10_000 {
            errors.push(format!(
                "tick_millis {} exceeds maximum allowed (10,000)",
                self.tick_millis
            ));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Validation(errors))
        }
    }
}

/// Configuration error type
#[derive(Debug, Clone)]
pub enum ConfigError {
    /// IO error reading config file
    Io(String),
    /// Parse error in config file
    Parse(String),
    /// Validation error
    Validation(Vec<String>),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(msg) => write!(f, "IO error: {}", msg),
            Self::Parse(msg) => write!(f, "Parse error: {}", msg),
            Self::Validation(errors) => write!(f, "Validation errors: {}", errors.join("; ")),
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = BlotterConfig::default();
        assert_eq!(config.endpoint, "http://localhost:8080");
        assert_eq!(config.log_level, "info");
        assert_eq!(config.tick_millis, 100);
    }

    #[test]
    fn test_default_config_validates() {
        let config = BlotterConfig::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: BlotterConfig =
            toml::from_str("endpoint = \"http://feed.internal:9000\"").unwrap();
        assert_eq!(config.endpoint, "http://feed.internal:9000");
        assert_eq!(config.log_level, "info");
        assert_eq!(config.tick_millis, 100);
    }

    #[test]
    fn test_env_override() {
        std::env::set_var("FXBLOTTER_ENDPOINT", "http://feed.internal:9000");
        let config = BlotterConfig::default().with_env_override();
        assert_eq!(config.endpoint, "http://feed.internal:9000");
        std::env::remove_var("FXBLOTTER_ENDPOINT");
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let config = BlotterConfig::load_or_default(Path::new("does/not/exist.toml")).unwrap();
        assert_eq!(config.endpoint, "http://localhost:8080");
    }

    #[test]
    fn test_load_or_default_reads_file() {
        let path = std::env::temp_dir().join("fxblotter_load_test.toml");
        std::fs::write(
            &path,
            "endpoint = \"http://feed.internal:9000\"\ntick_millis = 250\n",
        )
        .unwrap();

        let config = BlotterConfig::load_or_default(&path).unwrap();
        assert_eq!(config.endpoint, "http://feed.internal:9000");
        assert_eq!(config.tick_millis, 250);
        assert_eq!(config.log_level, "info");

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_load_or_default_rejects_bad_toml() {
        let path = std::env::temp_dir().join("fxblotter_bad_toml_test.toml");
        std::fs::write(&path, "endpoint = [not toml").unwrap();

        let result = BlotterConfig::load_or_default(&path);
        assert!(matches!(result, Err(ConfigError::Parse(_))));

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_validate_invalid_log_level() {
        let mut config = BlotterConfig::default();
        config.log_level = "invalid".to_string();

        let result = config.validate();
        assert!(result.is_err());

        if let Err(ConfigError::Validation(errors)) = result {
            assert!(errors.iter().any(|e| e.contains("log_level")));
        } else {
            panic!("Expected validation error");
        }
    }

    #[test]
    fn test_validate_valid_log_levels() {
        for level in &["trace", "debug", "info", "warn", "error", "INFO", "DEBUG"] {
            let mut config = BlotterConfig::default();
            config.log_level = level.to_string();
            assert!(
                config.validate().is_ok(),
                "Log level '{}' should be valid",
                level
            );
        }
    }

    #[test]
    fn test_validate_invalid_endpoint() {
        let mut config = BlotterConfig::default();
        config.endpoint = "not-a-valid-url".to_string();

        let result = config.validate();
        assert!(result.is_err());

        if let Err(ConfigError::Validation(errors)) = result {
            assert!(errors.iter().any(|e| e.contains("endpoint")));
        } else {
            panic!("Expected validation error");
        }
    }

    #[test]
    fn test_validate_https_endpoint() {
        let mut config = BlotterConfig::default();
        config.endpoint = "https://feed.example.com:8443".to_string();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_tick_zero() {
        let mut config = BlotterConfig::default();
        config.tick_millis = 0;

        let result = config.validate();
        assert!(result.is_err());

        if let Err(ConfigError::Validation(errors)) = result {
            assert!(errors.iter().any(|e| e.contains("tick_millis")));
        } else {
            panic!("Expected validation error");
        }
    }

    #[test]
    fn test_validate_tick_too_large() {
        let mut config = BlotterConfig::default();
        config.tick_millis = 60_000;

        let result = config.validate();
        assert!(result.is_err());

        if let Err(ConfigError::Validation(errors)) = result {
            assert!(errors.iter().any(|e| e.contains("exceeds maximum")));
        } else {
            panic!("Expected validation error");
        }
    }

    #[test]
    fn test_validate_multiple_errors() {
        let mut config = BlotterConfig::default();
        config.log_level = "invalid".to_string();
        config.endpoint = "bad-url".to_string();
        config.tick_millis = 0;

        let result = config.validate();
        assert!(result.is_err());

        if let Err(ConfigError::Validation(errors)) = result {
            assert!(errors.len() >= 3, "Expected at least 3 validation errors");
        } else {
            panic!("Expected validation error");
        }
    }

    #[test]
    fn test_config_error_display() {
        let error = ConfigError::Validation(vec!["Error 1".to_string(), "Error 2".to_string()]);
        let display = format!("{}", error);
        assert!(display.contains("Error 1"));
        assert!(display.contains("Error 2"));
    }
}
