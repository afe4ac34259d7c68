//! Unified error handling for Registra Core.
//!
//! This module provides a unified error type that wraps domain and application
//! errors, with rich context and user-actionable suggestions.
//!
//! None of these carry rejected field values: those are reported through
//! `ValidationVerdict`, which is a successful result.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for Registra Core operations.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum RegistraError {
    /// Errors from the domain layer (contract violations).
    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    /// Errors from the application layer (orchestration failures).
    #[error("Application error: {0}")]
    Application(#[from] ApplicationError),
}

impl RegistraError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => match e.category() {
                crate::domain::ErrorCategory::Validation => ErrorCategory::Validation,
                crate::domain::ErrorCategory::Internal => ErrorCategory::Internal,
            },
            Self::Application(e) => e.category(),
        }
    }

    /// Whether this error is a broken caller contract rather than bad input.
    pub fn is_precondition_violation(&self) -> bool {
        matches!(
            self,
            Self::Domain(DomainError::UnknownEntityType { .. })
                | Self::Application(ApplicationError::OutOfStep { .. })
        )
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Internal,
}

/// Convenient result type alias.
pub type RegistraResult<T> = Result<T, RegistraError>;
