//! Global arguments that apply to every subcommand.
//!
//! Declared here and flattened into [`super::Cli`] so that `-v`, `-q`, etc.
//! are available on any invocation without repetition

use clap::Args;
use std::path::PathBuf;

/// Global arguments for all commands.
#[derive(Debug, Default, Args)]
pub struct GlobalArgs {
    /// Increase logging verbosity.
    ///
    /// Pass once for INFO (`-v`), twice for DEBUG (`-vv`), three times for
    /// TRACE (`-vvv`).  Conflicts with `--quiet`.
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        global = true,
        help = "Increase verbosity (-v, -vv, -vvv)",
        long_help = "Increase logging verbosity:
    (none)  - Only warnings and errors
    -v      - Info level (progress messages)
    -vv     - Debug level (every copied and patched file)
    -vvv    - Trace level (very verbose)"
    )]
    pub verbose: u8,

    /// Suppress all non-error output.
    #[arg(
        short = 'q',
        long = "quiet",
        global = true,
        conflicts_with = "verbose",
        help = "Suppress non-error output"
    )]
    pub quiet: bool,

    /// Disable ANSI colour codes.
    ///
    /// Automatically honoured when `NO_COLOR` is set in the environment
    /// (see <https://no-color.org>).
    #[arg(
        long = "no-color",
        global = true,
        env = "NO_COLOR",
        value_parser = clap::builder::FalseyValueParser::new(),
        help = "Disable colored output"
    )]
    pub no_color: bool,

    /// Configuration file path.
    #[arg(
        short = 'c',
        long = "config",
        global = true,
        value_name = "FILE",
        help = "Configuration file path"
    )]
    pub config: Option<PathBuf>,

    #[command(flatten)]
    pub paths: PathArgs,

    /// Output style.
    #[arg(
        long = "output-format",
        global = true,
        value_enum,
        default_value = "auto",
        help = "Output style"
    )]
    pub output_format: OutputFormat,
}

/// Resource directory overrides; they beat config file and environment.
#[derive(Debug, Default, Clone, Args)]
pub struct PathArgs {
    #[arg(
        long = "root",
        global = true,
        value_name = "DIR",
        help = "Resource root containing boards/, idf-templates/ and features/"
    )]
    pub root: Option<PathBuf>,

    #[arg(
        long = "boards-dir",
        global = true,
        value_name = "DIR",
        help = "Boards directory (default: <root>/boards)"
    )]
    pub boards_dir: Option<PathBuf>,

    #[arg(
        long = "templates-dir",
        global = true,
        value_name = "DIR",
        help = "Base project template (default: <root>/idf-templates/base_project)"
    )]
    pub templates_dir: Option<PathBuf>,

    #[arg(
        long = "features-dir",
        global = true,
        value_name = "DIR",
        help = "Feature assets directory (default: <root>/features)"
    )]
    pub features_dir: Option<PathBuf>,
}

/// How the CLI should render its output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Auto-detect based on terminal.
    #[default]
    Auto,
    /// Human-readable with colors.
    Human,
    /// Plain text without colors.
    Plain,
}
