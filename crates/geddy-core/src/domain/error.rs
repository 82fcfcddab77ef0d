// ============================================================================
// domain/error.rs - DOMAIN ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (so they can be wrapped without losing detail)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors
    // ========================================================================
    #[error("Invalid app name '{name}': {reason}")]
    InvalidAppName { name: String, reason: String },

    #[error("Invalid resource name '{input}': {reason}")]
    InvalidResourceName { input: String, reason: String },

    #[error("Shell command cannot be empty")]
    EmptyCommand,

    // ========================================================================
    // Router file constraints
    // ========================================================================
    #[error("Router file must contain '{marker}' exactly once (found {found})")]
    RouterMarker { marker: &'static str, found: usize },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidAppName { name, reason } => vec![
                format!("App name '{}' is invalid: {}", name, reason),
                "Use letters, digits, '-', '_' and '.'".into(),
                "Examples: blog, my-app, shop_v2".into(),
            ],
            Self::InvalidResourceName { input, reason } => vec![
                format!("Resource argument '{}' is invalid: {}", input, reason),
                "Pass the singular name, optionally followed by the plural".into(),
                "Examples: post, post,posts, person,people".into(),
            ],
            Self::EmptyCommand => vec!["This is likely a bug in a command plan".into()],
            Self::RouterMarker { marker, found: 0 } => vec![
                format!("'{}' was not found in the router file", marker),
                "Run the generator from the root of a Geddy app".into(),
                "Restore the export line at the end of config/router.js".into(),
            ],
            Self::RouterMarker { marker, .. } => vec![
                format!("'{}' appears more than once in the router file", marker),
                "Remove the duplicate export so the insertion point is unambiguous".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidAppName { .. } | Self::InvalidResourceName { .. } => {
                ErrorCategory::Validation
            }
            Self::RouterMarker { .. } => ErrorCategory::Validation,
            Self::EmptyCommand => ErrorCategory::Internal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Internal,
}
