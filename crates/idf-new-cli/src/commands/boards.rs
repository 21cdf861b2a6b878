//! `idf-new boards`: list the boards that can be generated.

use idf_new_core::{application::ProjectGenerator, domain::BoardInfo};

use crate::{
    cli::{BoardsArgs, ListFormat},
    error::{CliResult, IntoCli},
    output::OutputManager,
};

pub fn execute(
    args: BoardsArgs,
    generator: &ProjectGenerator,
    boards_dir: &std::path::Path,
    output: &OutputManager,
) -> CliResult<()> {
    let boards = generator.list_boards()?;

    match args.format {
        ListFormat::Table => {
            if boards.is_empty() {
                output.print(&format!("No boards found under {}.", boards_dir.display()))?;
                return Ok(());
            }
            output.header("Available boards:")?;
            for board in &boards {
                for line in describe(board) {
                    output.print(&line)?;
                }
            }
        }

        ListFormat::List => {
            for board in &boards {
                output.data(board.board_id.as_str())?;
            }
        }

        // JSON must stay parseable when piped, so it bypasses --quiet.
        ListFormat::Json => {
            let json = serde_json::to_string_pretty(&boards)
                .map_err(std::io::Error::from)
                .with_cli_context(|| "cannot serialise board list")?;
            output.data(&json)?;
        }
    }

    Ok(())
}

/// Table lines for one board: id and name, then screen and traits if known.
fn describe(board: &BoardInfo) -> Vec<String> {
    let mut lines = vec![format!("  {}  {}", board.board_id, board.display_name)];
    if let Some(screen) = board.screen_summary() {
        lines.push(format!("      screen: {screen}"));
    }
    let traits = board.traits();
    if !traits.is_empty() {
        lines.push(format!("      traits: {}", traits.join(", ")));
    }
    lines
}
