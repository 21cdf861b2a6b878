use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::DomainError;

/// Board identifier: a `/`-separated path relative to the boards root.
///
/// Invariant: non-blank, no backslashes, no empty or `.` segments. Containment inside the boards root
/// is checked by the catalog, not here.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct BoardId(String);

impl BoardId {
    pub fn parse(raw: impl AsRef<str>) -> Result<Self, DomainError> {
        let raw = raw.as_ref().trim();
        if raw.is_empty() {
            return Err(DomainError::InvalidBoardId {
                value: raw.to_string(),
                reason: "board id cannot be empty",
            });
        }
        let unified = raw.replace('\\', "/");
        let segments: Vec<&str> = unified
            .split('/')
            .filter(|s| !s.is_empty() && *s != ".")
            .collect();
        if segments.is_empty() {
            return Err(DomainError::InvalidBoardId {
                value: raw.to_string(),
                reason: "board id has no path segments",
            });
        }

        // Absolute ids keep their leading slash so the catalog can reject them.
        let prefix = if unified.starts_with('/') { "/" } else { "" };
        Ok(Self(format!("{prefix}{}", segments.join("/"))))
    }

    /// Build an id from a path relative to the boards root.
    pub fn from_relative_path(relative: &Path) -> Result<Self, DomainError> {
        let joined = relative
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/");
        Self::parse(joined)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn as_path(&self) -> &Path {
        Path::new(&self.0)
    }

    /// Flattened form used in generated file names (`a/b` becomes `a_b`).
    pub fn file_stem(&self) -> String {
        self.0.trim_matches('/').replace('/', "_")
    }

    /// `board_<stem>.c`, the name the board source gets inside `main/`.
    pub fn source_file_name(&self) -> String {
        format!("board_{}.c", self.file_stem())
    }
}

impl fmt::Display for BoardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for BoardId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Display descriptor from a board's metadata.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BoardScreen {
    pub size_inches: Option<f64>,
    pub resolution: Option<String>,
    pub technology: Option<String>,
    pub shape: Option<String>,
}

impl BoardScreen {
    /// One-line description, e.g. `1.85" 360x360 IPS round shape`.
    ///
    /// `None` when no field is populated.
    pub fn summary(&self) -> Option<String> {
        let mut parts = Vec::new();
        if let Some(size) = self.size_inches.filter(|s| *s != 0.0) {
            parts.push(format!("{size}\""));
        }
        if let Some(resolution) = non_empty(&self.resolution) {
            parts.push(resolution.to_string());
        }
        if let Some(technology) = non_empty(&self.technology) {
            parts.push(technology.to_string());
        }
        if let Some(shape) = non_empty(&self.shape) {
            parts.push(format!("{shape} shape"));
        }

        if parts.is_empty() {
            None
        } else {
            Some(parts.join(" "))
        }
    }
}

/// Raw contents of `board.json`.
///
/// Every field is optional; unknown fields are ignored. Defaults are applied
/// by [`BoardMetadata::into_info`].
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct BoardMetadata {
    pub display_name: Option<String>,
    pub features: Option<Vec<String>>,
    pub has_touch: Option<bool>,
    pub screen: Option<BoardScreen>,
    pub panel: Option<String>,
}

impl BoardMetadata {
    /// Merge metadata with the board's location into a [`BoardInfo`].
    pub fn into_info(self, board_id: BoardId, directory: PathBuf) -> BoardInfo {
        let display_name = self
            .display_name
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| leaf_name(&directory));

        let mut features: Vec<String> = Vec::new();
        for feature in self.features.unwrap_or_default() {
            if feature.trim().is_empty() || features.contains(&feature) {
                continue;
            }
            features.push(feature);
        }

        BoardInfo {
            board_id,
            directory,
            display_name,
            features,
            has_touch: self.has_touch.unwrap_or(false),
            screen: self.screen,
            panel: self.panel,
        }
    }
}

/// A board available for generation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BoardInfo {
    pub board_id: BoardId,
    pub directory: PathBuf,
    pub display_name: String,
    pub features: Vec<String>,
    pub has_touch: bool,
    pub screen: Option<BoardScreen>,
    pub panel: Option<String>,
}

impl BoardInfo {
    /// Board without metadata: every field takes its default.
    pub fn bare(board_id: BoardId, directory: PathBuf) -> Self {
        BoardMetadata::default().into_info(board_id, directory)
    }

    pub fn screen_summary(&self) -> Option<String> {
        self.screen.as_ref().and_then(BoardScreen::summary)
    }

    /// Searchable traits: touch, screen shape and technology, declared
    /// features, panel.
    ///
    /// Deduplicated case-insensitively, first spelling wins.
    pub fn traits(&self) -> Vec<String> {
        let mut candidates: Vec<String> = Vec::new();
        if self.has_touch {
            candidates.push("touch".into());
        }
        if let Some(screen) = &self.screen {
            if let Some(shape) = non_empty(&screen.shape) {
                candidates.push(shape.to_string());
            }
            if let Some(technology) = non_empty(&screen.technology) {
                candidates.push(technology.to_lowercase());
            }
        }
        candidates.extend(self.features.iter().cloned());
        if let Some(panel) = non_empty(&self.panel) {
            candidates.push(panel.to_lowercase());
        }

        let mut seen = std::collections::HashSet::new();
        candidates
            .into_iter()
            .filter(|t| !t.is_empty() && seen.insert(t.to_lowercase()))
            .collect()
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

fn leaf_name(directory: &Path) -> String {
    directory
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}
