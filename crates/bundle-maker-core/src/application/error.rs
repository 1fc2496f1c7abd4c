//! Application layer errors.
//!
//! These errors represent failures in orchestration, not input problems.
//! Input problems are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// A document could not be rendered (serializer failure).
    #[error("Template rendering failed: {reason}")]
    RenderingFailed { reason: String },

    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// Adapter state could not be accessed (lock poisoned, etc.).
    #[error("Adapter state is unavailable: {name}")]
    AdapterUnavailable { name: &'static str },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Check that no file is in the way of a directory".into(),
                "Files written before the failure were left in place".into(),
            ],
            Self::RenderingFailed { reason } => vec![
                format!("Rendering failed: {}", reason),
                "This is likely a bug, please report it".into(),
            ],
            Self::AdapterUnavailable { name } => vec![
                format!("Component unavailable: {}", name),
                "Try again".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::FilesystemError { .. } => ErrorCategory::Io,
            Self::RenderingFailed { .. } | Self::AdapterUnavailable { .. } => {
                ErrorCategory::Internal
            }
        }
    }
}
