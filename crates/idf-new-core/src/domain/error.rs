// ============================================================================
// domain/error.rs - value object validation failures
// ============================================================================

use thiserror::Error;

use crate::error::ErrorCategory;

/// Root domain error type.
///
/// Domain errors only describe malformed input; nothing here touches disk.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid board id '{value}': {reason}")]
    InvalidBoardId { value: String, reason: &'static str },

    #[error("Invalid project name '{value}': {reason}")]
    InvalidProjectName { value: String, reason: &'static str },

    #[error("Invalid feature flag '{value}': {reason}")]
    InvalidFeatureFlag { value: String, reason: &'static str },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidBoardId { .. } => vec![
                "Board ids are paths relative to the boards directory".into(),
                "Try: idf-new boards".into(),
            ],
            Self::InvalidProjectName { .. } => vec![
                "Use a simple directory name, e.g. my_display_app".into(),
                "Use --dest to place the project somewhere else".into(),
            ],
            Self::InvalidFeatureFlag { .. } => vec![
                "Feature flags are lowercase letters, digits, '-' and '_'".into(),
                "Try: idf-new features".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        ErrorCategory::Validation
    }
}
