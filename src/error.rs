//! Error types for the SEO audit application.
//!
//! This module provides structured error handling with:
//! - `StorageError`: failures of the local persistence medium
//! - `GatewayError`: failures of the external analysis service
//! - `ExportError`: failures while writing an exported report
//! - `AppError`: domain errors raised by the controller and its collaborators
//! - `Result<T>`: Type alias for Results using AppError

use thiserror::Error;

// ============================================================================
// LEAF ERRORS
// ============================================================================

/// Errors from the key-value persistence medium.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Storage encoding error: {0}")]
    Encoding(#[from] serde_json::Error),
}

/// Errors from the analysis gateway. The display text is what the user sees
/// in the error banner.
#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("API_KEY_MISSING: Please configure your Gemini API key")]
    MissingApiKey,

    #[error("Could not reach the analysis service: {0}")]
    Network(String),

    #[error("Analysis service error {status}: {body}")]
    Upstream { status: u16, body: String },

    #[error("The analysis service returned an unreadable report: {0}")]
    MalformedResponse(String),

    /// Failure without any detail; see `user_message`.
    #[error("Unknown analysis failure")]
    Unknown,
}

impl GatewayError {
    /// Create a network error
    pub fn network(err: impl std::fmt::Display) -> Self {
        Self::Network(err.to_string())
    }

    /// Create a malformed response error
    pub fn malformed(msg: impl Into<String>) -> Self {
        Self::MalformedResponse(msg.into())
    }

    /// Text for the error banner, or `None` when the failure carries no
    /// detail worth showing.
    pub fn user_message(&self) -> Option<String> {
        match self {
            Self::Unknown => None,
            other => Some(other.to_string()),
        }
    }
}

/// Errors while exporting a report document.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Failed to write report document: {0}")]
    Io(#[from] std::io::Error),
}

// ============================================================================
// DOMAIN ERROR TYPE
// ============================================================================

/// Domain-specific errors for application operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Submit was called with a blank URL
    #[error("URL must not be empty")]
    EmptyInput,

    /// Internal misuse of a state machine; a programming error
    #[error("Invalid state: {0}")]
    InvalidState(String),

    #[error(transparent)]
    Gateway(#[from] GatewayError),

    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error(transparent)]
    Export(#[from] ExportError),
}

impl AppError {
    /// Create an invalid state error
    pub fn invalid_state(msg: impl Into<String>) -> Self {
        Self::InvalidState(msg.into())
    }
}

/// Result type alias using AppError.
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gateway_errors_render_user_facing_messages() {
        let err = GatewayError::Upstream {
            status: 503,
            body: "overloaded".into(),
        };
        assert_eq!(err.to_string(), "Analysis service error 503: overloaded");
        assert_eq!(err.user_message().as_deref(), Some("Analysis service error 503: overloaded"));
    }

    #[test]
    fn unknown_failures_have_no_user_message() {
        assert_eq!(GatewayError::Unknown.user_message(), None);
        assert!(GatewayError::network("refused").user_message().is_some());
    }

    #[test]
    fn app_error_is_transparent_over_gateway_errors() {
        let err: AppError = GatewayError::MissingApiKey.into();
        assert_eq!(
            err.to_string(),
            "API_KEY_MISSING: Please configure your Gemini API key"
        );
    }
}
