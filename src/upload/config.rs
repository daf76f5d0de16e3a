//! Uploader configuration

use crate::error::{Result, UploadError};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Request timeout applied when none is configured
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

/// Configuration for an [`Uploader`](crate::Uploader)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploaderConfig {
    /// Endpoint that receives the JSON payload
    #[serde(rename = "upload-url")]
    pub upload_url: String,

    /// Client-side request timeout in seconds (default: 30)
    #[serde(rename = "timeout-secs", default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl UploaderConfig {
    /// Create a configuration for the given endpoint with default values
    pub fn new<S: Into<String>>(upload_url: S) -> Self {
        Self {
            upload_url: upload_url.into(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Set the request timeout in seconds
    pub fn timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Check the values a caller supplied explicitly.
    ///
    /// The URL itself is not parsed; a malformed URL surfaces as a failed
    /// upload rather than a configuration error.
    pub fn validate(&self) -> Result<()> {
        if self.upload_url.trim().is_empty() {
            return Err(UploadError::invalid_parameter(
                "upload_url",
                "Upload URL cannot be empty",
            ));
        }

        if self.timeout_secs == 0 {
            return Err(UploadError::invalid_parameter(
                "timeout_secs",
                "Timeout must be greater than 0",
            ));
        }

        Ok(())
    }

    /// Convert the configuration to a JSON string
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(UploadError::from)
    }

    /// Create a configuration from a JSON string
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_timeout() {
        let config = UploaderConfig::new("http://localhost:3000/api/upload-csv");
        assert_eq!(config.timeout_secs, 30);
        assert_eq!(config.timeout(), Duration::from_secs(30));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validation() {
        let config = UploaderConfig::new("  ");
        match config.validate().unwrap_err() {
            UploadError::InvalidParameter { parameter, .. } => {
                assert_eq!(parameter, "upload_url");
            }
            _ => panic!("Expected InvalidParameter error"),
        }

        let config = UploaderConfig::new("http://localhost").timeout_secs(0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_json() {
        let config = UploaderConfig::new("https://example.com/upload").timeout_secs(5);
        let json = config.to_json().unwrap();
        assert!(json.contains("\"upload-url\""));
        assert!(json.contains("\"timeout-secs\":5"));

        let parsed = UploaderConfig::from_json(&json).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_config_json_defaults_timeout() {
        let parsed = UploaderConfig::from_json(r#"{"upload-url": "http://a/b"}"#).unwrap();
        assert_eq!(parsed.timeout_secs, DEFAULT_TIMEOUT_SECS);

        assert!(UploaderConfig::from_json(r#"{"upload-url": "http://a/b", "timeout-secs": 0}"#)
            .is_err());
    }
}
