//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (`--root`, `--boards-dir`, ...; merged in [`AppConfig::layout`])
//! 2. Environment variables: `IDF_NEW_PATHS__ROOT`, `IDF_NEW_OUTPUT__NO_COLOR`, ...
//! 3. Config file: `--config FILE` or [`AppConfig::config_path`]
//! 4. Built-in defaults: resource root discovered by
//!    [`idf_new_adapters::discover_root`]

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use serde::{Deserialize, Serialize};
use tracing::debug;

use idf_new_adapters::{ResourceLayout, discover_root};
use idf_new_core::domain::paths;

use crate::cli::PathArgs;

/// Prefix of configuration environment variables.
const ENV_PREFIX: &str = "IDF_NEW";

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Resource locations.
    pub paths: PathsConfig,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PathsConfig {
    pub root: Option<PathBuf>,
    pub boards_dir: Option<PathBuf>,
    pub templates_dir: Option<PathBuf>,
    pub features_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
}

impl AppConfig {
    /// Load configuration from file and environment on top of defaults.
    ///
    /// An explicit `config_file` must exist; the default location is
    /// optional.
    pub fn load(config_file: Option<&Path>) -> anyhow::Result<Self> {
        let (path, required) = match config_file {
            Some(path) => (path.to_path_buf(), true),
            None => (Self::config_path(), false),
        };
        debug!(path = %path.display(), required, "loading configuration");

        let settings = config::Config::builder()
            .add_source(config::File::from(path.as_path()).required(required))
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()
            .with_context(|| format!("failed to read configuration from {}", path.display()))?;

        settings
            .try_deserialize()
            .context("configuration has an invalid shape")
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.idf-new.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("dev", "idf-new", "idf-new")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".idf-new.toml"))
    }

    /// Resolve the resource directories.
    ///
    /// Each directory comes from its CLI flag, then its config entry, then
    /// the resource root (flag, config, discovery, finally `cwd`). Relative
    /// paths are taken relative to `cwd`.
    pub fn layout(&self, flags: &PathArgs, cwd: &Path) -> ResourceLayout {
        let root = flags
            .root
            .clone()
            .or_else(|| self.paths.root.clone())
            .or_else(|| discover_root(cwd))
            .unwrap_or_else(|| cwd.to_path_buf());
        let defaults = ResourceLayout::from_root(paths::absolutize(&root, cwd));

        let pick = |flag: &Option<PathBuf>, configured: &Option<PathBuf>, fallback: PathBuf| {
            flag.as_ref()
                .or(configured.as_ref())
                .map(|p| paths::absolutize(p, cwd))
                .unwrap_or(fallback)
        };

        ResourceLayout {
            boards_dir: pick(&flags.boards_dir, &self.paths.boards_dir, defaults.boards_dir),
            templates_dir: pick(
                &flags.templates_dir,
                &self.paths.templates_dir,
                defaults.templates_dir,
            ),
            features_dir: pick(
                &flags.features_dir,
                &self.paths.features_dir,
                defaults.features_dir,
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn defaults_are_empty() {
        let cfg = AppConfig::default();
        assert!(cfg.paths.root.is_none());
        assert!(!cfg.output.no_color);
    }

    #[test]
    fn load_reads_explicit_file() {
        let tmp = TempDir::new().unwrap();
        let file = tmp.path().join("idf-new.toml");
        fs::write(
            &file,
            "[paths]\nroot = \"/opt/idf-new\"\n\n[output]\nno_color = true\n",
        )
        .unwrap();

        let cfg = AppConfig::load(Some(&file)).unwrap();
        assert_eq!(cfg.paths.root, Some(PathBuf::from("/opt/idf-new")));
        assert!(cfg.output.no_color);
        assert!(cfg.paths.boards_dir.is_none());
    }

    #[test]
    fn load_fails_for_missing_explicit_file() {
        let tmp = TempDir::new().unwrap();
        assert!(AppConfig::load(Some(&tmp.path().join("absent.toml"))).is_err());
    }

    #[test]
    fn config_path_is_not_empty() {
        let p = AppConfig::config_path();
        assert!(!p.as_os_str().is_empty());
    }

    #[test]
    fn flags_beat_config_and_root() {
        let cfg = AppConfig {
            paths: PathsConfig {
                root: Some(PathBuf::from("/cfg-root")),
                boards_dir: Some(PathBuf::from("/cfg-boards")),
                templates_dir: None,
                features_dir: Some(PathBuf::from("feats")),
            },
            ..Default::default()
        };
        let flags = PathArgs {
            boards_dir: Some(PathBuf::from("/flag-boards")),
            ..Default::default()
        };

        let layout = cfg.layout(&flags, Path::new("/work"));
        assert_eq!(layout.boards_dir, PathBuf::from("/flag-boards"));
        assert_eq!(
            layout.templates_dir,
            PathBuf::from("/cfg-root/idf-templates/base_project")
        );
        assert_eq!(layout.features_dir, PathBuf::from("/work/feats"));
    }

    #[test]
    fn root_flag_is_resolved_against_cwd() {
        let flags = PathArgs {
            root: Some(PathBuf::from("../res")),
            ..Default::default()
        };
        let layout = AppConfig::default().layout(&flags, Path::new("/work/app"));
        assert_eq!(layout.boards_dir, PathBuf::from("/work/res/boards"));
    }
}
