//! Application layer errors.
//!
//! These errors represent failures in orchestration, not domain rules.
//! Domain rule violations are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::{FailureKind, ShellCommand};
use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// A queued shell command failed; the rest of the queue was abandoned.
    #[error("Command {position} failed ({kind}): {command}: {detail}")]
    CommandFailed {
        command: ShellCommand,
        /// 1-based position of the command in its queue.
        position: usize,
        kind: FailureKind,
        detail: String,
        /// Commands left in the queue that never ran.
        skipped: usize,
    },

    /// Template rendering failed.
    #[error("Template rendering failed: {reason}")]
    RenderingFailed { reason: String },

    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// The router configuration file does not exist.
    #[error("Router file not found at {path}")]
    RouterNotFound { path: PathBuf },

    /// Shared adapter state could not be locked.
    #[error("Adapter state is poisoned")]
    LockPoisoned,
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::CommandFailed {
                command,
                kind,
                skipped,
                ..
            } => {
                let mut out = vec![format!("Failing command: {}", command)];
                if *kind == FailureKind::Diagnostic {
                    out.push("The command wrote to stderr, which counts as a failure".into());
                }
                if *skipped > 0 {
                    out.push(format!("{} later command(s) were not run", skipped));
                }
                out.push("Earlier commands are not undone; fix the cause and re-run".into());
                out
            }
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Ensure the parent directory exists".into(),
            ],
            Self::RouterNotFound { path } => vec![
                format!("Expected a router file at {}", path.display()),
                "Run the generator from the root of a Geddy app".into(),
                "Create an app first: geddy-gen app <name>".into(),
            ],
            _ => vec!["Check the error details above".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::CommandFailed { .. } => ErrorCategory::Internal,
            Self::RouterNotFound { .. } => ErrorCategory::NotFound,
            Self::RenderingFailed { .. } => ErrorCategory::Validation,
            Self::FilesystemError { .. } | Self::LockPoisoned => ErrorCategory::Internal,
        }
    }
}
