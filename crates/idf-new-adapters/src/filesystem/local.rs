//! Local filesystem adapter using std::fs.

use std::fs;
use std::io;
use std::path::Path;

use tracing::debug;
use walkdir::WalkDir;

use idf_new_core::{
    application::{ApplicationError, ports::Filesystem},
    error::{IdfNewError, IdfNewResult},
};

/// Production filesystem implementation using `std::fs`.
#[derive(Debug, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for LocalFilesystem {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn is_file(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn read_to_string(&self, path: &Path) -> IdfNewResult<String> {
        fs::read_to_string(path).map_err(|e| map_io_error(path, e, "read file"))
    }

    fn write_file(&self, path: &Path, content: &str) -> IdfNewResult<()> {
        fs::write(path, content).map_err(|e| map_io_error(path, e, "write file"))
    }

    fn copy_file(&self, from: &Path, to: &Path) -> IdfNewResult<()> {
        // fs::copy carries permission bits over.
        fs::copy(from, to).map_err(|e| map_io_error(to, e, "copy file"))?;

        if let Err(e) = preserve_mtime(from, to) {
            debug!("Could not preserve mtime of {}: {}", to.display(), e);
        }
        Ok(())
    }

    fn copy_tree(&self, from: &Path, to: &Path) -> IdfNewResult<()> {
        if to.exists() {
            return Err(map_io_error(
                to,
                io::Error::from(io::ErrorKind::AlreadyExists),
                "create directory",
            ));
        }

        for entry in WalkDir::new(from).follow_links(true).sort_by_file_name() {
            let entry = entry.map_err(|e| ApplicationError::FilesystemError {
                path: e.path().unwrap_or(from).to_path_buf(),
                reason: format!("Failed to walk template: {}", e),
            })?;

            let relative = entry
                .path()
                .strip_prefix(from)
                .map_err(|_| ApplicationError::FilesystemError {
                    path: entry.path().to_path_buf(),
                    reason: "entry outside of copied tree".into(),
                })?;
            let target = to.join(relative);

            if entry.file_type().is_dir() {
                self.create_dir_all(&target)?;
            } else {
                self.copy_file(entry.path(), &target)?;
            }
        }

        debug!("Copied tree {} -> {}", from.display(), to.display());
        Ok(())
    }

    fn create_dir_all(&self, path: &Path) -> IdfNewResult<()> {
        fs::create_dir_all(path).map_err(|e| map_io_error(path, e, "create directory"))
    }
}

fn preserve_mtime(from: &Path, to: &Path) -> io::Result<()> {
    let modified = fs::metadata(from)?.modified()?;
    fs::File::options()
        .write(true)
        .open(to)?
        .set_modified(modified)
}

fn map_io_error(path: &Path, e: io::Error, operation: &str) -> IdfNewError {
    ApplicationError::FilesystemError {
        path: path.to_path_buf(),
        reason: format!("Failed to {}: {}", operation, e),
    }
    .into()
}
