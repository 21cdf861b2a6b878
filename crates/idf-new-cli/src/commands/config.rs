//! `idf-new config`: inspect the effective configuration.

use std::path::PathBuf;

use serde::Serialize;

use idf_new_adapters::ResourceLayout;

use crate::{
    cli::ConfigCommands,
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// What `config show` prints: the loaded values plus the directories they
/// resolve to.
#[derive(Debug, Serialize)]
struct Effective<'a> {
    #[serde(flatten)]
    config: &'a AppConfig,
    resolved: Resolved,
}

#[derive(Debug, Serialize)]
struct Resolved {
    boards_dir: PathBuf,
    templates_dir: PathBuf,
    features_dir: PathBuf,
}

/// Dispatch to the correct config subcommand.
pub fn execute(
    cmd: ConfigCommands,
    config: &AppConfig,
    layout: &ResourceLayout,
    output: &OutputManager,
) -> CliResult<()> {
    match cmd {
        ConfigCommands::Show => {
            output.data(render(config, layout)?.trim_end())?;
        }
        ConfigCommands::Path => {
            output.data(&AppConfig::config_path().display().to_string())?;
        }
    }

    Ok(())
}

fn render(config: &AppConfig, layout: &ResourceLayout) -> CliResult<String> {
    let effective = Effective {
        config,
        resolved: Resolved {
            boards_dir: layout.boards_dir.clone(),
            templates_dir: layout.templates_dir.clone(),
            features_dir: layout.features_dir.clone(),
        },
    };
    toml::to_string_pretty(&effective).map_err(|e| CliError::ConfigError {
        message: format!("Failed to serialise config: {e}"),
        source: Some(Box::new(e)),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_includes_resolved_directories() {
        let layout = ResourceLayout::from_root("/opt/idf-new");
        let text = render(&AppConfig::default(), &layout).unwrap();

        assert!(text.contains("[resolved]"));
        assert!(text.contains("boards_dir = \"/opt/idf-new/boards\""));
        assert!(text.contains("no_color = false"));
    }

    #[test]
    fn render_round_trips_configured_root() {
        let mut config = AppConfig::default();
        config.paths.root = Some(PathBuf::from("/srv/res"));
        let text = render(&config, &ResourceLayout::from_root("/srv/res")).unwrap();

        let value: toml::Value = toml::from_str(&text).unwrap();
        assert_eq!(value["paths"]["root"].as_str(), Some("/srv/res"));
    }
}
