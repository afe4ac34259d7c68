//! Application layer errors.
//!
//! These errors represent failures in orchestration, not intake rules.
//! Contract violations on field values are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::WizardStep;
use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ApplicationError {
    /// A step was submitted while the flow was on a different step.
    #[error("cannot submit {submitted} while the flow is on {current}")]
    OutOfStep {
        submitted: WizardStep,
        current: WizardStep,
    },

    /// An intake snapshot could not be read.
    #[error("intake source error at {path}: {reason}")]
    IntakeSource { path: PathBuf, reason: String },

    /// An intake snapshot was read but is not valid TOML or JSON.
    #[error("malformed intake file {path}: {reason}")]
    IntakeMalformed { path: PathBuf, reason: String },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::OutOfStep { current, .. } => vec![
                format!("The flow is currently on step {} ({})", current.number(), current),
                "Submit the current step first, or go back".into(),
            ],
            Self::IntakeSource { path, .. } => vec![
                format!("Failed to read: {}", path.display()),
                "Check that the file exists and is readable".into(),
            ],
            Self::IntakeMalformed { path, .. } => vec![
                format!("Fix the syntax in: {}", path.display()),
                "Use TOML, or JSON with a .json extension".into(),
                "Sections: [company] and [representative]".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::OutOfStep { .. } => ErrorCategory::Internal,
            Self::IntakeSource { .. } => ErrorCategory::NotFound,
            Self::IntakeMalformed { .. } => ErrorCategory::Validation,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_and_malformed_sources_are_distinct_categories() {
        let missing = ApplicationError::IntakeSource {
            path: PathBuf::from("intake.toml"),
            reason: "No such file or directory".into(),
        };
        let malformed = ApplicationError::IntakeMalformed {
            path: PathBuf::from("intake.toml"),
            reason: "expected `]`".into(),
        };

        assert_eq!(missing.category(), ErrorCategory::NotFound);
        assert_eq!(malformed.category(), ErrorCategory::Validation);
        assert!(malformed.to_string().starts_with("malformed intake file"));
    }
}
