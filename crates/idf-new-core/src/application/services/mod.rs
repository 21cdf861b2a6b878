//! Application services - orchestrate use cases.

pub mod generator;
pub mod project_service;

pub use generator::{GenerationOptions, ProjectGenerator};
pub use project_service::{ProjectEditor, ProjectFactory, Replacements};
