//! Filesystem-backed board catalog.
//!
//! # Directory layout expected
//!
//! ```text
//! boards/
//! ├── espressif/
//! │   └── esp32s3_devkitc/
//! │       ├── board_impl.c        ← required
//! │       ├── board.json          ← optional metadata
//! │       └── idf_component.yml   ← optional, copied into main/
//! └── wvshr_1.28_esp32/
//!     └── board_impl.c
//! ```
//!
//! A board's id is its directory relative to `boards/`, always with `/`
//! separators (`espressif/esp32s3_devkitc`).
//!
//! # `board.json` format
//!
//! ```json
//! {
//!   "display_name": "Waveshare 1.85\" Round Touch",
//!   "features": ["lvgl", "touch"],
//!   "has_touch": true,
//!   "screen": {
//!     "size_inches": 1.85,
//!     "resolution": "360x360",
//!     "technology": "IPS",
//!     "shape": "round"
//!   },
//!   "panel": "ST77916"
//! }
//! ```
//!
//! Every field is optional and unknown fields are ignored. A file that is not
//! valid JSON, or a known field with the wrong type, is fatal.

use std::{
    fs,
    path::{Path, PathBuf},
};

use tracing::{debug, instrument, warn};
use walkdir::WalkDir;

use idf_new_core::{
    application::{ApplicationError, ports::BoardCatalog},
    domain::{BoardId, BoardInfo, BoardMetadata, layout, paths},
    error::{IdfNewError, IdfNewResult},
};

/// Catalog over a `boards/` directory on the local filesystem.
#[derive(Debug, Clone)]
pub struct FilesystemBoardCatalog {
    boards_dir: PathBuf,
}

impl FilesystemBoardCatalog {
    /// Create a catalog rooted at `boards_dir`.
    ///
    /// The directory does not need to exist; a missing root is simply an
    /// empty catalog.
    pub fn new(boards_dir: impl Into<PathBuf>) -> Self {
        Self {
            boards_dir: boards_dir.into(),
        }
    }

    // ── Discovery ─────────────────────────────────────────────────────────

    /// Every directory below the root holding `board_impl.c`, sorted by id.
    fn board_dirs(&self) -> Vec<(BoardId, PathBuf)> {
        if !self.boards_dir.is_dir() {
            debug!(dir = %self.boards_dir.display(), "boards directory missing");
            return Vec::new();
        }

        let mut found = Vec::new();
        for entry in WalkDir::new(&self.boards_dir).min_depth(1) {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    warn!(error = %e, "skipping unreadable entry under boards directory");
                    continue;
                }
            };

            if entry.file_name() != layout::BOARD_IMPL || !entry.path().is_file() {
                continue;
            }

            let Some(directory) = entry.path().parent() else {
                continue;
            };
            let relative = directory
                .strip_prefix(&self.boards_dir)
                .unwrap_or(directory);

            match BoardId::from_relative_path(relative) {
                Ok(id) => found.push((id, directory.to_path_buf())),
                Err(_) => debug!(
                    path = %entry.path().display(),
                    "ignoring board_impl.c at the boards root"
                ),
            }
        }

        found.sort_by(|a, b| a.0.cmp(&b.0));
        found
    }

    fn available_ids(&self) -> Vec<String> {
        self.board_dirs()
            .into_iter()
            .map(|(id, _)| id.to_string())
            .collect()
    }

    fn not_found(&self, board_id: &BoardId) -> IdfNewError {
        ApplicationError::BoardNotFound {
            board_id: board_id.to_string(),
            available: self.available_ids(),
        }
        .into()
    }

    // ── Metadata ──────────────────────────────────────────────────────────

    fn load_board_info(&self, board_id: BoardId, directory: PathBuf) -> IdfNewResult<BoardInfo> {
        let meta_path = directory.join(layout::BOARD_META_FILE);
        if !meta_path.exists() {
            return Ok(BoardInfo::bare(board_id, directory));
        }

        let invalid = |reason: String| ApplicationError::InvalidBoardMetadata {
            board_id: board_id.to_string(),
            reason,
        };

        let raw = fs::read_to_string(&meta_path).map_err(|e| invalid(e.to_string()))?;
        let metadata: BoardMetadata =
            serde_json::from_str(&raw).map_err(|e| invalid(e.to_string()))?;

        debug!(board = %board_id, "loaded board metadata");
        Ok(metadata.into_info(board_id, directory))
    }

    // ── Containment ───────────────────────────────────────────────────────

    fn ensure_within_boards(&self, board_id: &BoardId, candidate: &Path) -> IdfNewResult<()> {
        let escapes = || ApplicationError::BoardEscapesRoot {
            board_id: board_id.to_string(),
        };

        if board_id.as_path().is_absolute() || !paths::is_within(candidate, &self.boards_dir) {
            return Err(escapes().into());
        }

        // Symlinks can still point elsewhere once resolved.
        if let (Ok(real), Ok(real_root)) = (candidate.canonicalize(), self.boards_dir.canonicalize())
        {
            if !real.starts_with(&real_root) {
                return Err(escapes().into());
            }
        }
        Ok(())
    }
}

impl BoardCatalog for FilesystemBoardCatalog {
    #[instrument(skip(self), fields(dir = %self.boards_dir.display()))]
    fn list_boards(&self) -> IdfNewResult<Vec<BoardInfo>> {
        let boards = self
            .board_dirs()
            .into_iter()
            .map(|(id, dir)| self.load_board_info(id, dir))
            .collect::<IdfNewResult<Vec<_>>>()?;

        debug!(count = boards.len(), "finished loading boards");
        Ok(boards)
    }

    #[instrument(skip(self), fields(board = %board_id))]
    fn validate_board(&self, board_id: &BoardId) -> IdfNewResult<PathBuf> {
        let candidate = paths::normalize(&self.boards_dir.join(board_id.as_path()));
        self.ensure_within_boards(board_id, &candidate)?;

        if !candidate.is_dir() || candidate == paths::normalize(&self.boards_dir) {
            return Err(self.not_found(board_id));
        }
        if !candidate.join(layout::BOARD_IMPL).is_file() {
            return Err(self.not_found(board_id));
        }

        Ok(candidate)
    }
}
