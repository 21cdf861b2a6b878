//! In-memory filesystem adapter for testing.

use std::{
    collections::{BTreeMap, BTreeSet},
    path::{Path, PathBuf},
    sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard},
};

use idf_new_core::{
    application::{ApplicationError, ports::Filesystem},
    error::{IdfNewError, IdfNewResult},
};

/// In-memory filesystem for testing.
///
/// Clones share the same storage, so a test can keep a handle while the
/// generator owns another.
#[derive(Debug, Clone, Default)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<MemoryFilesystemInner>>,
}

#[derive(Debug, Default)]
struct MemoryFilesystemInner {
    files: BTreeMap<PathBuf, String>,
    directories: BTreeSet<PathBuf>,
}

impl MemoryFilesystemInner {
    fn add_dir_all(&mut self, path: &Path) {
        let mut current = PathBuf::new();
        for component in path.components() {
            current.push(component);
            self.directories.insert(current.clone());
        }
    }

    fn parent_exists(&self, path: &Path) -> bool {
        match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => self.directories.contains(parent),
            _ => true,
        }
    }
}

impl MemoryFilesystem {
    /// Create a new empty memory filesystem.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a file, creating its parent directories (testing helper).
    pub fn with_file(self, path: impl AsRef<Path>, content: impl Into<String>) -> Self {
        if let Ok(mut inner) = self.inner.write() {
            let path = path.as_ref();
            if let Some(parent) = path.parent() {
                inner.add_dir_all(parent);
            }
            inner.files.insert(path.to_path_buf(), content.into());
        }
        self
    }

    /// Read a file's content (testing helper).
    pub fn read_file(&self, path: impl AsRef<Path>) -> Option<String> {
        let inner = self.inner.read().ok()?;
        inner.files.get(path.as_ref()).cloned()
    }

    /// All files below `root`, sorted.
    pub fn list_files(&self, root: impl AsRef<Path>) -> Vec<PathBuf> {
        let root = root.as_ref();
        self.inner
            .read()
            .map(|inner| {
                inner
                    .files
                    .keys()
                    .filter(|p| p.starts_with(root))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default()
    }

    fn read(&self, path: &Path) -> IdfNewResult<RwLockReadGuard<'_, MemoryFilesystemInner>> {
        self.inner.read().map_err(|_| poisoned(path))
    }

    fn write(&self, path: &Path) -> IdfNewResult<RwLockWriteGuard<'_, MemoryFilesystemInner>> {
        self.inner.write().map_err(|_| poisoned(path))
    }
}

impl Filesystem for MemoryFilesystem {
    fn exists(&self, path: &Path) -> bool {
        self.inner
            .read()
            .map(|inner| inner.files.contains_key(path) || inner.directories.contains(path))
            .unwrap_or(false)
    }

    fn is_dir(&self, path: &Path) -> bool {
        self.inner
            .read()
            .map(|inner| inner.directories.contains(path))
            .unwrap_or(false)
    }

    fn is_file(&self, path: &Path) -> bool {
        self.inner
            .read()
            .map(|inner| inner.files.contains_key(path))
            .unwrap_or(false)
    }

    fn read_to_string(&self, path: &Path) -> IdfNewResult<String> {
        self.read(path)?
            .files
            .get(path)
            .cloned()
            .ok_or_else(|| not_found(path))
    }

    fn write_file(&self, path: &Path, content: &str) -> IdfNewResult<()> {
        let mut inner = self.write(path)?;

        if !inner.parent_exists(path) {
            return Err(ApplicationError::FilesystemError {
                path: path.to_path_buf(),
                reason: "Parent directory does not exist".into(),
            }
            .into());
        }

        inner.files.insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    fn copy_file(&self, from: &Path, to: &Path) -> IdfNewResult<()> {
        let content = self.read_to_string(from)?;
        self.write_file(to, &content)
    }

    fn copy_tree(&self, from: &Path, to: &Path) -> IdfNewResult<()> {
        let mut inner = self.write(to)?;

        if !inner.directories.contains(from) {
            return Err(not_found(from));
        }
        if inner.files.contains_key(to) || inner.directories.contains(to) {
            return Err(ApplicationError::FilesystemError {
                path: to.to_path_buf(),
                reason: "Failed to create directory: already exists".into(),
            }
            .into());
        }

        let rebase = |p: &Path| p.strip_prefix(from).ok().map(|rel| to.join(rel));
        let directories: Vec<PathBuf> = inner
            .directories
            .iter()
            .filter_map(|d| rebase(d))
            .collect();
        let files: Vec<(PathBuf, String)> = inner
            .files
            .iter()
            .filter_map(|(p, c)| rebase(p).map(|target| (target, c.clone())))
            .collect();

        for dir in directories {
            inner.add_dir_all(&dir);
        }
        inner.files.extend(files);
        Ok(())
    }

    fn create_dir_all(&self, path: &Path) -> IdfNewResult<()> {
        self.write(path)?.add_dir_all(path);
        Ok(())
    }
}

fn not_found(path: &Path) -> IdfNewError {
    ApplicationError::FilesystemError {
        path: path.to_path_buf(),
        reason: "No such file or directory".into(),
    }
    .into()
}

fn poisoned(path: &Path) -> IdfNewError {
    ApplicationError::FilesystemError {
        path: path.to_path_buf(),
        reason: "memory filesystem lock poisoned".into(),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_requires_parent() {
        let fs = MemoryFilesystem::new();
        assert!(fs.write_file(Path::new("/p/main/x.c"), "").is_err());

        fs.create_dir_all(Path::new("/p/main")).unwrap();
        fs.write_file(Path::new("/p/main/x.c"), "int x;").unwrap();
        assert_eq!(fs.read_file("/p/main/x.c").as_deref(), Some("int x;"));
    }

    #[test]
    fn copy_tree_rebases_everything() {
        let fs = MemoryFilesystem::new()
            .with_file("/t/CMakeLists.txt", "project(base_project)")
            .with_file("/t/main/main.c", "void app_main(void) {}");

        fs.copy_tree(Path::new("/t"), Path::new("/w/demo")).unwrap();

        assert!(fs.is_dir(Path::new("/w/demo/main")));
        assert_eq!(
            fs.list_files("/w/demo"),
            vec![
                PathBuf::from("/w/demo/CMakeLists.txt"),
                PathBuf::from("/w/demo/main/main.c"),
            ]
        );
        // Source untouched.
        assert_eq!(fs.list_files("/t").len(), 2);
    }

    #[test]
    fn copy_tree_refuses_existing_destination() {
        let fs = MemoryFilesystem::new()
            .with_file("/t/a", "")
            .with_file("/w/demo/b", "");

        assert!(fs.copy_tree(Path::new("/t"), Path::new("/w/demo")).is_err());
    }

    #[test]
    fn clones_share_storage() {
        let fs = MemoryFilesystem::new();
        let handle = fs.clone();
        fs.create_dir_all(Path::new("/p")).unwrap();
        fs.write_file(Path::new("/p/f"), "shared").unwrap();

        assert_eq!(handle.read_file("/p/f").as_deref(), Some("shared"));
    }
}
