//! Application layer for idf-new.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (ProjectGenerator, ProjectFactory)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Registry**: The feature registry the orchestrator looks flags up in
//! - **Errors**: Application-specific error types

pub mod error;
pub mod ports;
pub mod registry;
pub mod services;

pub use services::{
    GenerationOptions, ProjectEditor, ProjectFactory, ProjectGenerator, Replacements,
};

// Re-export port traits (for adapter implementation)
pub use ports::{BoardCatalog, Feature, FeatureContext, Filesystem};

pub use error::ApplicationError;
pub use registry::FeatureRegistry;
