//! Custom error types for the EERIS CLI
//!
//! This module defines the error hierarchy for the client using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for EERIS CLI operations
#[derive(Error, Debug)]
pub enum EerisError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Validation errors caught before any request is made
    #[error("Validation error: {0}")]
    Validation(String),

    /// The server could not be reached
    #[error("Connection error: {0}")]
    Connection(String),

    /// The server answered with a non-success status
    #[error("Server error ({status}): {message}")]
    Api { status: u16, message: String },

    /// The stored token was rejected or no session exists
    #[error("Not authenticated: {0}")]
    Unauthorized(String),

    /// Chart rendering failed inside the export pipeline
    #[error("Chart rendering failed: {0}")]
    ChartRender(String),

    /// Embedding the rendered chart into the document failed
    #[error("Failed to embed chart: {0}")]
    ChartEmbed(String),

    /// Document assembly or delivery errors
    #[error("Export error: {0}")]
    Export(String),

    /// An export run was started while another one is in flight
    #[error("An export is already in progress")]
    ExportInProgress,

    /// TUI errors
    #[error("TUI error: {0}")]
    Tui(String),
}

impl EerisError {
    /// Create an API error from a status code and response body
    ///
    /// 401/403 are mapped to `Unauthorized` so callers can clear the stored
    /// session and point the user at `eeris login`.
    pub fn api(status: u16, message: impl Into<String>) -> Self {
        let message = message.into();
        if status == 401 || status == 403 {
            Self::Unauthorized(if message.is_empty() {
                "session expired or access denied".to_string()
            } else {
                message
            })
        } else {
            Self::Api { status, message }
        }
    }

    /// Check if this is an authorization failure
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized(_))
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for EerisError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for EerisError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<reqwest::Error> for EerisError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::Json(err.to_string())
        } else {
            Self::Connection(err.to_string())
        }
    }
}

/// Result type alias for EERIS CLI operations
pub type EerisResult<T> = Result<T, EerisError>;
