// ============================================================================
// domain/error.rs - PRECONDITION FAILURES
// ============================================================================

use thiserror::Error;

use crate::domain::value_objects::EntityType;

/// Root domain error type.
///
/// Rejected user input is NOT an error: it is reported through a
/// `ValidationVerdict`. This enum covers inputs that violate the engine's
/// contract with its caller, such as a selection outside the catalog.
///
/// All errors are:
/// - Cloneable
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Contract violations
    // ========================================================================
    #[error("entity type '{id}' is not in the catalog")]
    UnknownEntityType { id: String },

    // ========================================================================
    // Boundary parsing
    // ========================================================================
    #[error("invalid date '{value}': {reason}")]
    InvalidDate { value: String, reason: String },

    #[error("unsupported locale '{locale}'")]
    UnsupportedLocale { locale: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::UnknownEntityType { id } => {
                let mut suggestions = vec![
                    format!("'{}' does not name a legal form", id),
                    "Known entity types:".into(),
                ];
                suggestions.extend(
                    EntityType::ALL
                        .iter()
                        .map(|e| format!("  • {:<24} {}", e.id(), e.english_label())),
                );
                suggestions
            }
            Self::InvalidDate { value, .. } => vec![
                format!("Could not read '{}' as a date", value),
                "Use the YYYY-MM-DD format, e.g. 1990-05-14".into(),
            ],
            Self::UnsupportedLocale { .. } => vec![
                "Supported locales: en, ar".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::UnknownEntityType { .. } => ErrorCategory::Internal,
            Self::InvalidDate { .. } | Self::UnsupportedLocale { .. } => ErrorCategory::Validation,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Internal,
}
