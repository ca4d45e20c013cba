//! Custom error types for translation operations

use thiserror::Error;

use crate::core::models::SafetyRating;

/// Translation-related errors
#[derive(Error, Debug)]
pub enum TranslationError {
    /// Instruction file absent at startup
    #[error("Instruction file not found: {path}")]
    MissingInstructions {
        /// Path that was probed
        path: String,
    },

    /// No translatable documents under the input root
    #[error("No translatable documents found in {path}")]
    EmptyInputSet {
        /// Input root that was scanned
        path: String,
    },

    /// Remote call succeeded but carried no usable text
    #[error("Service returned a response with no translatable text")]
    EmptyResponse,

    /// Content was filtered by the service's safety layer
    #[error("Translation blocked due to safety ratings: {ratings:?}")]
    SafetyBlocked {
        /// Ratings reported by the service, surfaced for diagnosis
        ratings: Vec<SafetyRating>,
    },

    /// API request failed
    #[error("API error: {status} - {message}")]
    ApiError {
        /// HTTP status code
        status: u16,
        /// Raw response body
        message: String,
    },

    /// Network error
    #[error("Network error: {message}")]
    NetworkError {
        /// Underlying transport error text
        message: String,
    },

    /// Response body did not match the expected shape
    #[error("Invalid response: {message}")]
    InvalidResponse {
        /// Deserialization error text
        message: String,
    },

    /// File operation error
    #[error("File error: {path} - {message}")]
    FileError {
        /// Path the operation touched
        path: String,
        /// Underlying error text
        message: String,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    ConfigError {
        /// What is missing or invalid
        message: String,
    },

    /// IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Reqwest error
    #[error("HTTP client error: {0}")]
    HttpError(#[from] reqwest::Error),

    /// JSON error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// Result type for translation operations
pub type Result<T> = std::result::Result<T, TranslationError>;
