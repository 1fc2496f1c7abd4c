// ============================================================================
// domain/error.rs - DOMAIN ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (so the CLI can hold on to them while formatting)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Constraint Violations
    // ========================================================================
    #[error("Required field missing: {field}")]
    MissingRequiredField { field: &'static str },

    // ========================================================================
    // Rendered structure consistency
    // ========================================================================
    #[error("Invalid project structure: {0}")]
    InvalidStructure(String),

    #[error("Duplicate path in project structure: {path}")]
    DuplicatePath { path: String },

    #[error("Absolute paths not allowed: {path}")]
    AbsolutePathNotAllowed { path: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::MissingRequiredField { field } => vec![
                format!("The {} is required", field),
                "Bundle Name and Vendor Name are required!".into(),
                "Example: bundle-maker new Blog --vendor Acme".into(),
            ],
            Self::InvalidStructure(msg) => vec![
                "The rendered bundle layout is inconsistent".into(),
                format!("Details: {}", msg),
            ],
            _ => vec!["This is likely a bug in the bundle renderer".into()],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::MissingRequiredField { .. } => ErrorCategory::Validation,
            Self::InvalidStructure(_)
            | Self::DuplicatePath { .. }
            | Self::AbsolutePathNotAllowed { .. } => ErrorCategory::Internal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Internal,
}
