//! Application layer errors.
//!
//! These errors represent failures of the generation pipeline. Malformed
//! input values are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur while resolving boards or writing a project.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApplicationError {
    #[error("Template directory not found: {}", path.display())]
    TemplateNotFound { path: PathBuf },

    #[error("Board '{board_id}' not found. Available boards: {}", format_available(available))]
    BoardNotFound {
        board_id: String,
        available: Vec<String>,
    },

    #[error("Board '{board_id}' is missing board_impl.c")]
    BoardMissingImpl { board_id: String },

    #[error("Board path '{board_id}' escapes boards directory")]
    BoardEscapesRoot { board_id: String },

    #[error("Invalid board.json for board '{board_id}': {reason}")]
    InvalidBoardMetadata { board_id: String, reason: String },

    #[error("Destination already exists: {}", path.display())]
    DestinationExists { path: PathBuf },

    #[error("'{literal}' not found in {}", path.display())]
    LiteralNotFound { literal: String, path: PathBuf },

    #[error("unknown feature flag: {flag}")]
    UnknownFeature { flag: String },

    #[error("Feature flag '{flag}' is already registered")]
    DuplicateFeature { flag: String },

    /// Filesystem operation failed.
    #[error("Filesystem error at {}: {reason}", path.display())]
    FilesystemError { path: PathBuf, reason: String },
}

fn format_available(available: &[String]) -> String {
    if available.is_empty() {
        "(none)".into()
    } else {
        available.join(", ")
    }
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::TemplateNotFound { path } => vec![
                format!("Expected the base project at: {}", path.display()),
                "Set --templates-dir or IDF_NEW_ROOT to your idf-new checkout".into(),
            ],
            Self::BoardNotFound { available, .. } if available.is_empty() => vec![
                "No boards were found in the boards directory".into(),
                "Set --boards-dir or IDF_NEW_ROOT to a directory containing boards/".into(),
            ],
            Self::BoardNotFound { .. } => vec!["Try: idf-new boards".into()],
            Self::BoardMissingImpl { board_id } => vec![format!(
                "Add boards/{board_id}/board_impl.c to make the board usable"
            )],
            Self::BoardEscapesRoot { .. } => {
                vec!["Board ids must be paths inside the boards directory".into()]
            }
            Self::InvalidBoardMetadata { board_id, .. } => vec![
                format!("Fix boards/{board_id}/board.json"),
                "display_name, panel: strings; features: list of strings; has_touch: bool".into(),
            ],
            Self::DestinationExists { path } => vec![
                format!("Remove or rename {}", path.display()),
                "Or choose another location with --dest".into(),
            ],
            Self::LiteralNotFound { literal, .. } => {
                vec![format!("The template no longer contains '{literal}'")]
            }
            Self::UnknownFeature { .. } => vec!["Try: idf-new features".into()],
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
            ],
            Self::DuplicateFeature { .. } => vec![],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::TemplateNotFound { .. }
            | Self::BoardNotFound { .. }
            | Self::BoardMissingImpl { .. }
            | Self::LiteralNotFound { .. } => ErrorCategory::NotFound,
            Self::DestinationExists { .. } => ErrorCategory::Conflict,
            Self::BoardEscapesRoot { .. }
            | Self::UnknownFeature { .. }
            | Self::DuplicateFeature { .. } => ErrorCategory::Validation,
            Self::InvalidBoardMetadata { .. } => ErrorCategory::Configuration,
            Self::FilesystemError { .. } => ErrorCategory::Internal,
        }
    }
}
