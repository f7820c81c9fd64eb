//! Unified error handling for ViperX Core.
//!
//! This module provides a unified error type that wraps domain and application
//! errors, with rich context and user-actionable suggestions.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for ViperX Core operations.
#[derive(Debug, Error, Clone)]
pub enum ViperxError {
    /// Errors from the domain layer (invalid names, specs).
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Errors from the application layer (resolution, rendering, storage).
    #[error(transparent)]
    Application(#[from] ApplicationError),

    /// Unexpected internal errors (bugs).
    #[error("Internal error: {message}. This is a bug, please report it.")]
    Internal { message: String },
}

impl ViperxError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
            Self::Internal { .. } => vec![
                "This appears to be a bug in ViperX".into(),
                "Please report this issue at: https://github.com/kpihx/viperx/issues".into(),
            ],
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => e.category(),
            Self::Application(e) => e.category(),
            Self::Internal { .. } => ErrorCategory::Internal,
        }
    }
}

/// Error categories for UI display.
///
/// These mirror the resolver contract: misconstruction is `Configuration`,
/// bad operation input is `Validation`, a missing source capability is
/// `Unsupported`, and storage failures are `Io`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Configuration,
    Unsupported,
    Io,
    Internal,
}

/// Convenient result type alias.
pub type ViperxResult<T> = Result<T, ViperxError>;
