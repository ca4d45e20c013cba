//! Configuration management

use crate::core::errors::{Result, TranslationError};

/// Environment variable holding the API key
pub const API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Default REST endpoint of the generative language service
const DEFAULT_API_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Default model used for translation
const DEFAULT_MODEL: &str = "gemini-1.5-flash";

/// Default per-request timeout
const DEFAULT_TIMEOUT_MS: u64 = 120_000;

/// Configuration for the Gemini translation client
#[derive(Debug, Clone)]
pub struct TranslatorConfig {
    /// API key sent with every request
    pub api_key: String,
    /// Base URL of the REST endpoint
    pub api_endpoint: String,
    /// Model identifier, e.g. "gemini-1.5-flash"
    pub model: String,
    /// Per-request timeout in milliseconds
    pub timeout_ms: u64,
}

impl Default for TranslatorConfig {
    fn default() -> Self {
        Self {
            api_key: std::env::var(API_KEY_ENV).unwrap_or_default(),
            api_endpoint: std::env::var("GEMINI_API_ENDPOINT")
                .unwrap_or_else(|_| DEFAULT_API_ENDPOINT.to_string()),
            model: std::env::var("GEMINI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string()),
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }
}

impl TranslatorConfig {
    /// Build a configuration around an already-collected API key
    ///
    /// The remaining fields honor their environment overrides; an
    /// unparseable timeout falls back to the default.
    pub fn with_api_key(api_key: impl Into<String>) -> Self {
        let timeout_ms = std::env::var("REQUEST_TIMEOUT_MS")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .unwrap_or(DEFAULT_TIMEOUT_MS);

        Self {
            api_key: api_key.into(),
            timeout_ms,
            ..Self::default()
        }
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var(API_KEY_ENV).map_err(|_| TranslationError::ConfigError {
            message: format!("{API_KEY_ENV} environment variable is required"),
        })?;

        let timeout_ms = std::env::var("REQUEST_TIMEOUT_MS")
            .unwrap_or_else(|_| DEFAULT_TIMEOUT_MS.to_string())
            .parse::<u64>()
            .map_err(|e| TranslationError::ConfigError {
                message: format!("invalid REQUEST_TIMEOUT_MS: {e}"),
            })?;

        Ok(Self {
            api_key,
            timeout_ms,
            ..Self::default()
        })
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.api_key.trim().is_empty() {
            return Err(TranslationError::ConfigError {
                message: "API key is required".to_string(),
            });
        }

        if self.api_endpoint.trim().is_empty() {
            return Err(TranslationError::ConfigError {
                message: "API endpoint is required".to_string(),
            });
        }

        if self.model.trim().is_empty() {
            return Err(TranslationError::ConfigError {
                message: "model is required".to_string(),
            });
        }

        if self.timeout_ms == 0 {
            return Err(TranslationError::ConfigError {
                message: "timeout_ms must be greater than 0".to_string(),
            });
        }

        Ok(())
    }
}
