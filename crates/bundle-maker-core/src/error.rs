//! Unified error handling for bundle-maker core.
//!
//! This module provides a unified error type that wraps domain and application
//! errors, with user-actionable suggestions.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for bundle-maker core operations.
#[derive(Debug, Error, Clone)]
pub enum BundleMakerError {
    /// Errors from the domain layer (missing input, inconsistent layout).
    #[error("{0}")]
    Domain(#[from] DomainError),

    /// Errors from the application layer (rendering, filesystem).
    #[error("{0}")]
    Application(#[from] ApplicationError),
}

impl BundleMakerError {
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

    /// `true` for the required-field gate, which fires before any side effect.
    pub fn is_missing_field(&self) -> bool {
        matches!(
            self,
            Self::Domain(DomainError::MissingRequiredField { .. })
        )
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Io,
    Internal,
}

/// Convenient result type alias.
pub type BundleMakerResult<T> = Result<T, BundleMakerError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn missing_field_is_validation() {
        let err: BundleMakerError = DomainError::MissingRequiredField {
            field: "vendor name",
        }
        .into();
        assert_eq!(err.category(), ErrorCategory::Validation);
        assert!(err.is_missing_field());
        assert_eq!(err.to_string(), "Required field missing: vendor name");
    }

    #[test]
    fn filesystem_error_is_io() {
        let err: BundleMakerError = ApplicationError::FilesystemError {
            path: PathBuf::from("bundles/Blog"),
            reason: "Permission denied".into(),
        }
        .into();
        assert_eq!(err.category(), ErrorCategory::Io);
        assert!(!err.is_missing_field());
    }

    #[test]
    fn structure_inconsistency_is_internal() {
        let err: BundleMakerError = DomainError::DuplicatePath {
            path: "src/Command".into(),
        }
        .into();
        assert_eq!(err.category(), ErrorCategory::Internal);
        assert!(err.suggestions()[0].contains("bug in the bundle renderer"));
    }
}
