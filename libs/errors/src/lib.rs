//! Unified error handling for the hex utilities workspace
//!
//! One error type shared by the hex helpers, the bridge host and the CLI.
//! Services render it as an [`ErrorInfo`] body; library callers match on it.

use serde::{Deserialize, Serialize};
use thiserror::Error;

// ============================================================================
// ErrorInfo - API error response type
// ============================================================================

/// Standard error information for API responses
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorInfo {
    /// HTTP status code
    pub code: u16,
    /// Stable machine-readable error code (e.g. `INVALID_HEX`)
    pub error_code: String,
    /// Error message
    pub message: String,
    /// Detailed error description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ErrorInfo {
    /// Create a new ErrorInfo with just a message
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            code: 500,
            error_code: "INTERNAL_ERROR".to_string(),
            message: message.into(),
            details: None,
        }
    }

    /// Set the status code
    pub fn with_code(mut self, code: u16) -> Self {
        self.code = code;
        self
    }

    /// Set the machine-readable error code
    pub fn with_error_code(mut self, error_code: impl Into<String>) -> Self {
        self.error_code = error_code.into();
        self
    }

    /// Add details
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }
}

// ============================================================================
// HexError - Main error type
// ============================================================================

/// Main error type for the hex utilities workspace
#[derive(Debug, Error)]
pub enum HexError {
    // ======================================
    // Input Errors
    // ======================================
    #[error("Invalid hex '{input}': {reason}")]
    InvalidHex { input: String, reason: String },

    // ======================================
    // Bridge Errors
    // ======================================
    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    #[error("Invalid arguments for '{command}': {reason}")]
    InvalidArguments { command: String, reason: String },

    #[error("Bridge call '{command}' failed: {message}")]
    Bridge { command: String, message: String },

    // ======================================
    // File & I/O Errors
    // ======================================
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),

    // ======================================
    // Configuration Errors
    // ======================================
    #[error("Configuration error: {0}")]
    Configuration(String),
}

/// Result type alias using HexError
pub type HexResult<T> = Result<T, HexError>;

/// Error category - used for classification and status mapping
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Network,
    Configuration,
    Internal,
}

impl HexError {
    /// Shorthand for [`HexError::InvalidHex`]
    pub fn invalid_hex(input: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidHex {
            input: input.into(),
            reason: reason.into(),
        }
    }

    /// Shorthand for [`HexError::InvalidArguments`]
    pub fn invalid_arguments(command: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidArguments {
            command: command.into(),
            reason: reason.into(),
        }
    }

    /// Stable error code (for API bodies and logs)
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidHex { .. } => "INVALID_HEX",
            Self::UnknownCommand(_) => "UNKNOWN_COMMAND",
            Self::InvalidArguments { .. } => "INVALID_ARGUMENTS",
            Self::Bridge { .. } => "BRIDGE_ERROR",
            Self::Io(_) => "IO_ERROR",
            Self::Serialization(_) => "SERIALIZATION_ERROR",
            Self::Configuration(_) => "CONFIGURATION_ERROR",
        }
    }

    /// Error category
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidHex { .. } | Self::InvalidArguments { .. } => ErrorCategory::Validation,
            Self::UnknownCommand(_) => ErrorCategory::NotFound,
            Self::Io(e) if e.kind() == std::io::ErrorKind::NotFound => ErrorCategory::NotFound,
            Self::Bridge { .. } => ErrorCategory::Network,
            Self::Configuration(_) => ErrorCategory::Configuration,
            Self::Io(_) | Self::Serialization(_) => ErrorCategory::Internal,
        }
    }

    /// Get the appropriate HTTP status code for this error
    pub fn status_code(&self) -> u16 {
        match self.category() {
            ErrorCategory::Validation => 400,
            ErrorCategory::NotFound => 404,
            ErrorCategory::Network => 502,
            ErrorCategory::Configuration | ErrorCategory::Internal => 500,
        }
    }

    /// Convert to API ErrorInfo for HTTP responses
    pub fn to_error_info(&self) -> ErrorInfo {
        let info = ErrorInfo::new(self.to_string())
            .with_code(self.status_code())
            .with_error_code(self.error_code());

        match self {
            Self::InvalidHex { input, .. } => info.with_details(format!("input: {}", input)),
            Self::InvalidArguments { command, .. } => {
                info.with_details(format!("command: {}", command))
            },
            _ => info,
        }
    }

    /// Log level appropriate for this error
    pub fn log_level(&self) -> tracing::Level {
        match self.category() {
            ErrorCategory::Validation | ErrorCategory::NotFound => tracing::Level::INFO,
            ErrorCategory::Network => tracing::Level::WARN,
            _ => tracing::Level::ERROR,
        }
    }
}

// Conversion traits for common error types
impl From<serde_json::Error> for HexError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

#[cfg(feature = "axum-support")]
impl axum::response::IntoResponse for HexError {
    fn into_response(self) -> axum::response::Response {
        use axum::http::StatusCode;
        use axum::Json;

        let status =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(self.to_error_info())).into_response()
    }
}
