// src/error.rs

//! Unified error handling for the site.

use std::fmt;

use thiserror::Error;

/// Result type alias for site operations.
pub type Result<T> = std::result::Result<T, AppError>;

/// Unified application error type.
#[derive(Error, Debug)]
pub enum AppError {
    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Backend answered with a non-success status
    #[error("Upstream returned {status} for {url}")]
    Status { status: u16, url: String },

    /// JSON serialization/deserialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing failed
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// URL parsing failed
    #[error("URL parse error: {0}")]
    Url(#[from] url::ParseError),

    /// Template rendering failed
    #[error("Template error: {0}")]
    Template(#[from] askama::Error),

    /// Malformed percent-encoding in a URL segment
    #[error("Malformed encoding in '{segment}': {message}")]
    Encoding { segment: String, message: String },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Data validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// Requested record does not exist
    #[error("Not found: {0}")]
    NotFound(String),
}

impl AppError {
    /// Create an encoding error for a URL segment.
    pub fn encoding(segment: impl Into<String>, message: impl fmt::Display) -> Self {
        Self::Encoding {
            segment: segment.into(),
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

    /// Create a not-found error.
    pub fn not_found(what: impl Into<String>) -> Self {
        Self::NotFound(what.into())
    }

    /// Whether this error means the requested record does not exist.
    pub fn is_not_found(&self) -> bool {
        match self {
            Self::NotFound(_) => true,
            Self::Status { status, .. } => *status == 404,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_from_status() {
        let err = AppError::Status {
            status: 404,
            url: "http://api/berita/detail/1".to_string(),
        };
        assert!(err.is_not_found());

        let err = AppError::Status {
            status: 500,
            url: "http://api/berita".to_string(),
        };
        assert!(!err.is_not_found());
    }

    #[test]
    fn test_encoding_message() {
        let err = AppError::encoding("%zz", "invalid escape");
        assert_eq!(err.to_string(), "Malformed encoding in '%zz': invalid escape");
    }
}
