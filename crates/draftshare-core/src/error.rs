//! Unified application error types for DraftShare.
//!
//! All crates map their internal errors into [`AppError`] for consistent
//! propagation through the ? operator.

use std::fmt;
use thiserror::Error;

/// Top-level error kind categorization used across the entire application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum ErrorKind {
    /// The requested resource was not found.
    NotFound,
    /// The caller is not authenticated.
    Unauthorized,
    /// The caller lacks edit rights on the target document.
    Forbidden,
    /// Input validation failed.
    Validation,
    /// A preview token failed verification.
    LinkExpired,
    /// The document is not on the preview allow-list.
    NotRegistered,
    /// A toggle request was missing required fields.
    IncompleteRequest,
    /// The per-document anti-forgery token was missing or invalid.
    AntiForgery,
    /// A toggle request did not change the registration state.
    UnknownStatus,
    /// The registry store refused to persist the new set.
    NotSaved,
    /// An internal server error occurred.
    Internal,
    /// A database error occurred.
    Database,
    /// A configuration error occurred.
    Configuration,
    /// A serialization/deserialization error occurred.
    Serialization,
}

impl ErrorKind {
    /// Machine-readable code reported in the toggle response envelope.
    pub fn code(&self) -> &'static str {
        match self {
            Self::NotFound => "not_found",
            Self::Unauthorized => "unauthorized",
            Self::Forbidden => "cannot_edit",
            Self::Validation => "invalid_request",
            Self::LinkExpired => "link_expired",
            Self::NotRegistered => "not_registered",
            Self::IncompleteRequest => "incomplete_data",
            Self::AntiForgery => "invalid_nonce",
            Self::UnknownStatus => "unknown_status",
            Self::NotSaved => "not_saved",
            Self::Internal => "internal_error",
            Self::Database => "database_error",
            Self::Configuration => "configuration_error",
            Self::Serialization => "serialization_error",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound => write!(f, "NOT_FOUND"),
            Self::Unauthorized => write!(f, "UNAUTHORIZED"),
            Self::Forbidden => write!(f, "FORBIDDEN"),
            Self::Validation => write!(f, "VALIDATION"),
            Self::LinkExpired => write!(f, "LINK_EXPIRED"),
            Self::NotRegistered => write!(f, "NOT_REGISTERED"),
            Self::IncompleteRequest => write!(f, "INCOMPLETE_REQUEST"),
            Self::AntiForgery => write!(f, "ANTI_FORGERY"),
            Self::UnknownStatus => write!(f, "UNKNOWN_STATUS"),
            Self::NotSaved => write!(f, "NOT_SAVED"),
            Self::Internal => write!(f, "INTERNAL"),
            Self::Database => write!(f, "DATABASE"),
            Self::Configuration => write!(f, "CONFIGURATION"),
            Self::Serialization => write!(f, "SERIALIZATION"),
        }
    }
}

/// The unified application error used throughout DraftShare.
///
/// All crate-specific errors are mapped into `AppError` using `From` impls
/// or explicit `.map_err()` calls.
#[derive(Debug, Error)]
#[error("{kind}: {message}")]
pub struct AppError {
    /// The category of error.
    pub kind: ErrorKind,
    /// A human-readable error message.
    pub message: String,
    /// Optional underlying cause.
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl AppError {
    /// Create a new application error.
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            source: None,
        }
    }

    /// Create a new application error with an underlying cause.
    pub fn with_source(
        kind: ErrorKind,
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            kind,
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a not-found error.
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::NotFound, message)
    }

    /// Create an unauthenticated error.
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Unauthorized, message)
    }

    /// Create a permission-denied error.
    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Forbidden, message)
    }

    /// Create a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Validation, message)
    }

    /// The visitor-facing failure for a token that no longer verifies.
    pub fn link_expired() -> Self {
        Self::new(ErrorKind::LinkExpired, "This link has expired!")
    }

    /// The visitor-facing failure for a document without public preview.
    pub fn not_registered() -> Self {
        Self::new(ErrorKind::NotRegistered, "No public draft preview available!")
    }

    /// Create an incomplete-request error.
    pub fn incomplete_request(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::IncompleteRequest, message)
    }

    /// Create an anti-forgery failure.
    pub fn anti_forgery(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::AntiForgery, message)
    }

    /// Create an unknown-status error.
    pub fn unknown_status(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::UnknownStatus, message)
    }

    /// Create a not-saved error.
    pub fn not_saved(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::NotSaved, message)
    }

    /// Create an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Internal, message)
    }

    /// Create a database error.
    pub fn database(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Database, message)
    }

    /// Create a configuration error.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Configuration, message)
    }
}

impl Clone for AppError {
    fn clone(&self) -> Self {
        Self {
            kind: self.kind,
            message: self.message.clone(),
            source: None,
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        Self::with_source(
            ErrorKind::Serialization,
            format!("JSON serialization error: {err}"),
            err,
        )
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        Self::with_source(ErrorKind::Internal, format!("I/O error: {err}"), err)
    }
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        Self::with_source(
            ErrorKind::Configuration,
            format!("Configuration error: {err}"),
            err,
        )
    }
}
