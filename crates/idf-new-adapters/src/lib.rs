//! Infrastructure adapters for idf-new.
//!
//! This crate implements the ports defined in `idf-new-core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod board_catalog;
pub mod features;
pub mod filesystem;
pub mod resources;

// Re-export commonly used adapters
pub use board_catalog::FilesystemBoardCatalog;
pub use features::{GpsFeature, builtin_registry};
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use resources::{ResourceLayout, discover_root};
