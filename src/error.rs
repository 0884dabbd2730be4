// src/error.rs

//! Unified error handling for the aggregation pipeline.

use std::fmt;

use thiserror::Error;

use crate::models::Provider;

/// Result type alias for pipeline operations.
pub type Result<T> = std::result::Result<T, AppError>;

/// Unified application error type.
#[derive(Error, Debug)]
pub enum AppError {
    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// HTTP request failed (network failure or client timeout)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization/deserialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing failed
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// URL parsing failed
    #[error("URL parse error: {0}")]
    Url(#[from] url::ParseError),

    /// Provider answered with a non-success status
    #[error("{provider} API error: HTTP {status}")]
    Upstream { provider: Provider, status: u16 },

    /// No bearer token configured for a provider
    #[error("No API key configured for {provider}")]
    MissingCredential { provider: Provider },

    /// Provider payload did not have the expected shape
    #[error("Malformed {provider} payload: {message}")]
    MalformedPayload { provider: Provider, message: String },

    /// A source did not settle within the aggregation timeout
    #[error("{provider} did not respond within {timeout_secs}s")]
    SourceTimeout { provider: Provider, timeout_secs: u64 },

    /// A source panicked while fetching
    #[error("{provider} source panicked")]
    SourcePanicked { provider: Provider },

    /// Provider name could not be parsed
    #[error("Unknown provider '{0}' (expected linkedin, naukri or internshala)")]
    UnknownProvider(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Data validation error
    #[error("Validation error: {0}")]
    Validation(String),
}

impl AppError {
    /// Create a malformed payload error.
    pub fn malformed(provider: Provider, message: impl fmt::Display) -> Self {
        Self::MalformedPayload {
            provider,
            message: message.to_string(),
        }
    }

    /// Create a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }
}
