//! Unified error handling for idf-new core.
//!
//! This module provides a unified error type that wraps domain and application
//! errors, with categories for exit-code mapping and user-actionable
//! suggestions.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for idf-new core operations.
#[derive(Debug, Error, Clone)]
pub enum IdfNewError {
    /// Malformed input values (board ids, project names, flags).
    #[error("{0}")]
    Domain(#[from] DomainError),

    /// Failures while running the generation pipeline.
    #[error("{0}")]
    Application(#[from] ApplicationError),
}

impl IdfNewError {
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
            Self::Domain(e) => e.category(),
            Self::Application(e) => e.category(),
        }
    }
}

/// Error categories for UI display and exit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Conflict,
    NotFound,
    Configuration,
    Internal,
}

/// Convenient result type alias.
pub type IdfNewResult<T> = Result<T, IdfNewError>;
