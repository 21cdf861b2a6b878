//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat, PathArgs};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "idf-new",
    bin_name = "idf-new",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Initialize a new ESP-IDF project from a board and optional features",
    long_about = "idf-new copies the base ESP-IDF project template, names it, \
                  installs the selected board's implementation, and overlays \
                  optional features such as GPS support.",
    after_help = "EXAMPLES:\n\
        \x20 idf-new new my_display --board waveshare/wvshr185_round_touch\n\
        \x20 idf-new new tracker --board espressif/esp32s3_devkitc --feature gps\n\
        \x20 idf-new boards\n\
        \x20 idf-new completions bash > /usr/share/bash-completion/completions/idf-new",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generate a new project.
    #[command(
        visible_alias = "n",
        about = "Create a new ESP-IDF project",
        after_help = "EXAMPLES:\n\
            \x20 idf-new new my_display --board lilygo/tdisp191_amoled_touch\n\
            \x20 idf-new new tracker    --board wvshr_1.28_esp32 --feature gps\n\
            \x20 idf-new new demo       --board hackerbox/hb107_round128 --dest ~/firmware/demo"
    )]
    New(NewArgs),

    /// List available boards.
    #[command(
        visible_alias = "ls",
        about = "List available boards",
        after_help = "EXAMPLES:\n\
            \x20 idf-new boards\n\
            \x20 idf-new boards --format list\n\
            \x20 idf-new boards --format json"
    )]
    Boards(BoardsArgs),

    /// List optional features.
    #[command(about = "List optional features")]
    Features,

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 idf-new completions bash > ~/.local/share/bash-completion/completions/idf-new\n\
            \x20 idf-new completions zsh  > ~/.zfunc/_idf-new\n\
            \x20 idf-new completions fish > ~/.config/fish/completions/idf-new.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the idf-new configuration.
    #[command(about = "Configuration inspection", subcommand)]
    Config(ConfigCommands),
}

// ── new ───────────────────────────────────────────────────────────────────────

/// Arguments for `idf-new new`.
#[derive(Debug, Args)]
pub struct NewArgs {
    /// Name substituted into `project(...)`; also the default directory.
    #[arg(value_name = "NAME", help = "Project name")]
    pub name: String,

    #[arg(
        short = 'b',
        long = "board",
        value_name = "ID",
        help = "Board ID (path under boards/, e.g. waveshare/wvshr185_round_touch)"
    )]
    pub board: String,

    #[arg(
        short = 'd',
        long = "dest",
        value_name = "DIR",
        help = "Destination directory (default: ./<NAME>)"
    )]
    pub dest: Option<PathBuf>,

    /// Repeat or comma-separate to enable several; applied in order.
    #[arg(
        short = 'F',
        long = "feature",
        value_name = "FLAG",
        value_delimiter = ',',
        help = "Enable an optional feature (see `idf-new features`)"
    )]
    pub features: Vec<String>,
}

// ── boards ────────────────────────────────────────────────────────────────────

/// Arguments for `idf-new boards`.
#[derive(Debug, Args)]
pub struct BoardsArgs {
    /// Output format.
    #[arg(
        long = "format",
        value_enum,
        default_value = "table",
        help = "Output format"
    )]
    pub format: ListFormat,
}

/// Output format for the `boards` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ListFormat {
    /// Human-readable listing with screen and traits.
    Table,
    /// One board id per line.
    List,
    /// JSON array.
    Json,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `idf-new completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `idf-new config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the effective configuration as TOML.
    Show,
    /// Print the path to the default configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn parse_new_command() {
        let cli = Cli::parse_from(["idf-new", "new", "demo", "--board", "devkit"]);
        match cli.command {
            Commands::New(args) => {
                assert_eq!(args.name, "demo");
                assert_eq!(args.board, "devkit");
                assert!(args.dest.is_none());
                assert!(args.features.is_empty());
            }
            other => panic!("expected New command, got {other:?}"),
        }
    }

    #[test]
    fn features_keep_order_across_repeats_and_commas() {
        let cli = Cli::parse_from([
            "idf-new", "new", "demo", "-b", "devkit", "-F", "wifi,gps", "--feature", "audio",
        ]);
        let Commands::New(args) = cli.command else {
            panic!("expected New command");
        };
        assert_eq!(args.features, vec!["wifi", "gps", "audio"]);
    }

    #[test]
    fn board_is_required() {
        let result = Cli::try_parse_from(["idf-new", "new", "demo"]);
        assert!(result.is_err());
    }

    #[test]
    fn path_overrides_are_global() {
        let cli = Cli::parse_from(["idf-new", "boards", "--root", "/opt/idf-new"]);
        assert_eq!(cli.global.paths.root, Some(PathBuf::from("/opt/idf-new")));
    }

    #[test]
    fn boards_format_defaults_to_table() {
        let cli = Cli::parse_from(["idf-new", "boards"]);
        let Commands::Boards(args) = cli.command else {
            panic!("expected Boards command");
        };
        assert_eq!(args.format, ListFormat::Table);
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        // clap should reject --quiet --verbose together
        let result = Cli::try_parse_from(["idf-new", "--quiet", "--verbose", "boards"]);
        assert!(result.is_err());
    }
}
