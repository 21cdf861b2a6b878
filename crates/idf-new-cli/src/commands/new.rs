//! Implementation of the `idf-new new` command.
//!
//! Responsibility: translate CLI arguments into [`GenerationOptions`], call
//! the core generator, and display results. No business logic lives here.

use tracing::{info, instrument};

use idf_new_core::{
    application::{GenerationOptions, ProjectGenerator},
    domain::{BoardId, Project, ProjectName},
    error::IdfNewError,
};

use crate::{cli::NewArgs, error::CliResult, output::OutputManager};

/// Execute the `idf-new new` command.
///
/// 1. Validate the project name and board id
/// 2. Generate via [`ProjectGenerator`]
/// 3. Print the result and next-steps guidance
#[instrument(skip_all, fields(project = %args.name, board = %args.board))]
pub fn execute(
    args: NewArgs,
    generator: &ProjectGenerator,
    output: &OutputManager,
) -> CliResult<()> {
    let options = build_options(args)?;

    output.header(&format!(
        "Creating '{}' for board {}...",
        options.project_name, options.board_id
    ))?;

    let project = generator.generate(&options)?;
    info!(root = %project.root().display(), "Generation finished");

    output.success(&format!("Project created at {}", project.root().display()))?;
    let enabled = options.requested_features();
    if !enabled.is_empty() {
        output.info(&format!("Enabled features: {}", enabled.join(", ")))?;
    }

    output.print("")?;
    output.print("Next steps:")?;
    for step in next_steps(&project) {
        output.print(&format!("  {step}"))?;
    }

    Ok(())
}

fn build_options(args: NewArgs) -> CliResult<GenerationOptions> {
    let name = ProjectName::parse(&args.name).map_err(IdfNewError::from)?;
    let board = BoardId::parse(&args.board).map_err(IdfNewError::from)?;

    let mut options = GenerationOptions::new(name, board).with_features(args.features);
    if let Some(dest) = args.dest {
        options = options.with_destination(dest);
    }
    Ok(options)
}

fn next_steps(project: &Project) -> [String; 3] {
    [
        format!("cd {}", project.root().display()),
        "idf.py set-target <esp32/esp32s3/etc>".into(),
        "idf.py build flash monitor".into(),
    ]
}
