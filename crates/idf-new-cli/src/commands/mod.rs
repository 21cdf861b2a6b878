//! Command handlers, one module per subcommand.
//!
//! Handlers translate parsed arguments into core calls and render results.
//! Adapter wiring lives in [`build_generator`] so every command sees the same
//! resource layout.

pub mod boards;
pub mod completions;
pub mod config;
pub mod features;
pub mod new;

use std::path::Path;
use std::sync::Arc;

use tracing::debug;

use idf_new_adapters::{FilesystemBoardCatalog, LocalFilesystem, ResourceLayout, builtin_registry};
use idf_new_core::application::ProjectGenerator;

use crate::error::CliResult;

/// Wire the production adapters into a [`ProjectGenerator`].
pub fn build_generator(layout: &ResourceLayout, cwd: &Path) -> CliResult<ProjectGenerator> {
    debug!(
        boards = %layout.boards_dir.display(),
        templates = %layout.templates_dir.display(),
        features = %layout.features_dir.display(),
        "Resource layout"
    );

    let registry = builtin_registry(&layout.features_dir)?;
    Ok(ProjectGenerator::new(
        Box::new(FilesystemBoardCatalog::new(&layout.boards_dir)),
        registry,
        Arc::new(LocalFilesystem::new()),
        &layout.templates_dir,
        cwd,
    ))
}
