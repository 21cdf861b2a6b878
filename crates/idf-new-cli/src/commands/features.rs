//! `idf-new features`: list optional features as `<flag>\t<name>`.

use idf_new_core::application::{FeatureRegistry, ProjectGenerator};

use crate::{error::CliResult, output::OutputManager};

pub fn execute(generator: &ProjectGenerator, output: &OutputManager) -> CliResult<()> {
    let registry = generator.features();
    if registry.is_empty() {
        output.print("No optional features are currently registered.")?;
        return Ok(());
    }

    for row in rows(registry) {
        output.data(&row)?;
    }
    Ok(())
}

/// One line per feature, in registration order.
fn rows(registry: &FeatureRegistry) -> Vec<String> {
    registry
        .list()
        .map(|feature| format!("{}\t{}", feature.flag(), feature.name()))
        .collect()
}
