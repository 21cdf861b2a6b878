//! Resource root discovery.
//!
//! idf-new needs three directories that live next to each other in a
//! checkout:
//!
//! ```text
//! <root>/
//! ├── boards/
//! ├── idf-templates/base_project/
//! └── features/
//! ```
//!
//! # Root resolution order
//!
//! The first candidate containing a `boards/` directory wins:
//!
//! 1. **`$IDF_NEW_ROOT`**, environment variable override.
//! 2. **The working directory.**
//! 3. **The executable's directory and its ancestors**, so an installed
//!    binary next to (or below) the resources finds them, as does
//!    `target/debug/idf-new` inside a checkout.

use std::path::{Path, PathBuf};

use tracing::{debug, instrument, warn};

/// Environment variable naming the resource root.
pub const ROOT_ENV: &str = "IDF_NEW_ROOT";

const BOARDS: &str = "boards";
const TEMPLATES: [&str; 2] = ["idf-templates", "base_project"];
const FEATURES: &str = "features";

/// Where boards, the base template, and feature assets live.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceLayout {
    pub boards_dir: PathBuf,
    pub templates_dir: PathBuf,
    pub features_dir: PathBuf,
}

impl ResourceLayout {
    /// Standard layout below `root`.
    pub fn from_root(root: impl AsRef<Path>) -> Self {
        let root = root.as_ref();
        Self {
            boards_dir: root.join(BOARDS),
            templates_dir: TEMPLATES.iter().fold(root.to_path_buf(), |p, s| p.join(s)),
            features_dir: root.join(FEATURES),
        }
    }
}

/// Find the resource root using the order described in the module docs.
///
/// Returns `None` when no candidate has a `boards/` directory.
#[instrument]
pub fn discover_root(cwd: &Path) -> Option<PathBuf> {
    for candidate in candidate_roots(cwd) {
        debug!(path = %candidate.display(), "checking candidate resource root");
        if candidate.join(BOARDS).is_dir() {
            debug!(path = %candidate.display(), "resource root found");
            return Some(candidate);
        }
    }

    warn!("no resource root found; checked ${ROOT_ENV}, the working directory, and the executable's ancestors");
    None
}

/// Build the ordered list of candidate roots to probe.
fn candidate_roots(cwd: &Path) -> Vec<PathBuf> {
    let mut roots = Vec::new();

    // 1. Explicit environment variable.
    if let Some(env_root) = std::env::var_os(ROOT_ENV) {
        let p = PathBuf::from(env_root);
        roots.push(if p.is_absolute() { p } else { cwd.join(p) });
    }

    // 2. Working directory.
    roots.push(cwd.to_path_buf());

    // 3. Executable directory and ancestors.
    if let Ok(exe) = std::env::current_exe() {
        roots.extend(exe.ancestors().skip(1).map(Path::to_path_buf));
    }

    roots
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn layout_from_root() {
        let layout = ResourceLayout::from_root("/opt/idf-new");
        assert_eq!(layout.boards_dir, PathBuf::from("/opt/idf-new/boards"));
        assert_eq!(
            layout.templates_dir,
            PathBuf::from("/opt/idf-new/idf-templates/base_project")
        );
        assert_eq!(layout.features_dir, PathBuf::from("/opt/idf-new/features"));
    }

    #[test]
    fn working_directory_with_boards_is_a_root() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir_all(tmp.path().join("boards")).unwrap();

        // $IDF_NEW_ROOT, if set in the test environment, may take precedence.
        if std::env::var_os(ROOT_ENV).is_none() {
            assert_eq!(discover_root(tmp.path()), Some(tmp.path().to_path_buf()));
        }
    }

    #[test]
    fn candidates_start_with_working_directory_when_unset() {
        if std::env::var_os(ROOT_ENV).is_none() {
            let roots = candidate_roots(Path::new("/work"));
            assert_eq!(roots[0], PathBuf::from("/work"));
            assert!(roots.len() > 1);
        }
    }
}
