use std::fmt;
use std::path::{Path, PathBuf};

use super::{DomainError, layout};

/// Logical project name, substituted into `project(<name>)`.
///
/// Invariant: a single directory name (no separators, not hidden).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ProjectName(String);

impl ProjectName {
    pub fn parse(raw: impl AsRef<str>) -> Result<Self, DomainError> {
        let raw = raw.as_ref().trim();
        let reason = if raw.is_empty() {
            Some("name cannot be empty")
        } else if raw.starts_with('.') {
            Some("name cannot start with '.'")
        } else if raw.contains(['/', '\\']) {
            Some("name cannot contain path separators")
        } else if raw.chars().any(char::is_control) {
            Some("name cannot contain control characters")
        } else {
            None
        };

        match reason {
            Some(reason) => Err(DomainError::InvalidProjectName {
                value: raw.to_string(),
                reason,
            }),
            None => Ok(Self(raw.to_string())),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProjectName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A generated project on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    name: ProjectName,
    root: PathBuf,
}

impl Project {
    pub fn new(name: ProjectName, root: impl Into<PathBuf>) -> Self {
        Self {
            name,
            root: root.into(),
        }
    }

    pub fn name(&self) -> &ProjectName {
        &self.name
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// `<root>/main`
    pub fn main_dir(&self) -> PathBuf {
        self.root.join(layout::MAIN_DIR)
    }

    /// Resolve a project-relative target; absolute targets pass through.
    pub fn resolve(&self, target: &Path) -> PathBuf {
        if target.is_absolute() {
            target.to_path_buf()
        } else {
            self.root.join(target)
        }
    }
}
