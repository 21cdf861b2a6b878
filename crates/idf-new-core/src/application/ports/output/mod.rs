//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `idf-new-adapters` crate provides implementations.

use std::path::{Path, PathBuf};

use crate::domain::{BoardId, BoardInfo, Project};
use crate::error::IdfNewResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `idf_new_adapters::filesystem::LocalFilesystem` (production)
/// - `idf_new_adapters::filesystem::MemoryFilesystem` (testing)
///
/// Paths are absolute; the services resolve project-relative targets before
/// calling in.
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;

    fn is_dir(&self, path: &Path) -> bool;

    fn is_file(&self, path: &Path) -> bool;

    /// Read a UTF-8 text file.
    fn read_to_string(&self, path: &Path) -> IdfNewResult<String>;

    /// Write content to a file, replacing it if present.
    fn write_file(&self, path: &Path, content: &str) -> IdfNewResult<()>;

    /// Copy a single file, keeping permissions and modification time where
    /// the platform allows.
    fn copy_file(&self, from: &Path, to: &Path) -> IdfNewResult<()>;

    /// Recursively copy a directory tree into `to`, which must not exist.
    fn copy_tree(&self, from: &Path, to: &Path) -> IdfNewResult<()>;

    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> IdfNewResult<()>;
}

/// Port for board discovery.
///
/// Implemented by `idf_new_adapters::board_catalog::FilesystemBoardCatalog`.
#[cfg_attr(test, mockall::automock)]
pub trait BoardCatalog: Send + Sync {
    /// Every board below the root, sorted by id.
    fn list_boards(&self) -> IdfNewResult<Vec<BoardInfo>>;

    /// Resolve `board_id` to its directory, which is guaranteed to lie inside
    /// the boards root and to contain `board_impl.c`.
    fn validate_board(&self, board_id: &BoardId) -> IdfNewResult<PathBuf>;
}

/// What a feature gets to work with while it is applied.
pub struct FeatureContext<'a> {
    pub project: &'a Project,
    pub fs: &'a dyn Filesystem,
}

impl FeatureContext<'_> {
    pub fn project_root(&self) -> &Path {
        self.project.root()
    }

    pub fn main_dir(&self) -> PathBuf {
        self.project.main_dir()
    }
}

/// An optional overlay applied after the board is installed.
pub trait Feature: Send + Sync {
    /// Human label, e.g. "GPS support".
    fn name(&self) -> &str;

    /// Registry key and CLI value, e.g. "gps".
    fn flag(&self) -> &str;

    fn apply(&self, ctx: &FeatureContext<'_>) -> IdfNewResult<()>;
}
