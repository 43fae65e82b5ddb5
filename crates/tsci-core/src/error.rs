//! Unified error handling for tsci Core.
//!
//! A single error enum covers the core and its adapters. The init workflow
//! has one use case, so failures are grouped by the resource that failed
//! rather than by layer.

use std::path::PathBuf;
use thiserror::Error;

/// Root error type for init operations.
#[derive(Debug, Error, Clone)]
pub enum InitError {
    /// A filesystem operation failed (fatal tier).
    #[error("Filesystem error at {path}: {reason}")]
    Filesystem { path: PathBuf, reason: String },

    /// The package registry could not be reached or answered garbage.
    ///
    /// Only ever produced by `VersionLookup` implementations. The
    /// `VersionAdvisor` folds it into `VersionCheck::Unavailable`, so this
    /// variant never reaches the fatal error path.
    #[error("Registry unavailable: {reason}")]
    RegistryUnavailable { reason: String },

    /// A scaffold generator failed (fatal tier).
    #[error("Generator '{name}' failed: {reason}")]
    Generator { name: String, reason: String },

    /// An external command (package manager) exited unsuccessfully.
    #[error("Command failed: {command}: {reason}")]
    CommandFailed { command: String, reason: String },

    /// A starter file declared an unusable relative path.
    #[error("Invalid starter file path '{path}': {reason}")]
    InvalidStarterPath { path: PathBuf, reason: String },

    /// Unexpected internal errors (bugs).
    #[error("Internal error: {message}. This is a bug, please report it.")]
    Internal { message: String },
}

impl InitError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Filesystem { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Check available disk space".into(),
            ],
            Self::RegistryUnavailable { .. } => vec![
                "Check your network connection".into(),
                "The registry may be temporarily down; try again later".into(),
            ],
            Self::Generator { name, .. } => vec![
                format!("The '{name}' step could not complete"),
                "Re-running init is safe; existing files are never overwritten".into(),
            ],
            Self::CommandFailed { command, .. } => vec![
                format!("External command failed: {command}"),
                "Ensure the package manager is installed and in your PATH".into(),
                "Use --skip-install to scaffold without installing dependencies".into(),
            ],
            Self::InvalidStarterPath { .. } => vec![
                "Starter file paths must be relative to the project directory".into(),
            ],
            Self::Internal { .. } => vec![
                "This appears to be a bug in tsci".into(),
                "Please report this issue at: https://github.com/tscircuit/tsci/issues".into(),
            ],
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Filesystem { .. } => ErrorCategory::Internal,
            Self::RegistryUnavailable { .. } => ErrorCategory::Internal,
            Self::Generator { .. } => ErrorCategory::Internal,
            Self::CommandFailed { .. } => ErrorCategory::Internal,
            Self::InvalidStarterPath { .. } => ErrorCategory::Validation,
            Self::Internal { .. } => ErrorCategory::Internal,
        }
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Configuration,
    Internal,
}

/// Convenient result type alias.
pub type InitResult<T> = Result<T, InitError>;

/// Extension trait for adding context to errors.
pub trait Context<T> {
    /// Add context to an error.
    fn context(self, msg: impl Into<String>) -> InitResult<T>;
}

impl<T, E> Context<T> for Result<T, E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn context(self, msg: impl Into<String>) -> InitResult<T> {
        self.map_err(|e| InitError::Internal {
            message: format!("{}: {}", msg.into(), e),
        })
    }
}
