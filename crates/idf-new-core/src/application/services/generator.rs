//! Generation orchestrator.
//!
//! This service coordinates the whole workflow:
//! 1. Resolve the board
//! 2. Instantiate the base template
//! 3. Install the board source
//! 4. Apply requested features in request order
//!
//! A failure at any step aborts the rest. Nothing is rolled back, so a
//! failed run can leave a partially populated destination.

use std::path::PathBuf;
use std::sync::Arc;

use tracing::{info, instrument};

use crate::{
    application::{
        ports::{BoardCatalog, FeatureContext, Filesystem},
        registry::FeatureRegistry,
        services::ProjectFactory,
    },
    domain::{BoardId, BoardInfo, Project, ProjectName},
    error::IdfNewResult,
};

/// Fully validated parameters of one generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationOptions {
    pub project_name: ProjectName,
    pub board_id: BoardId,
    /// Defaults to `<cwd>/<project_name>`.
    pub destination: Option<PathBuf>,
    /// Order matters; duplicates are dropped, first occurrence wins.
    pub feature_flags: Vec<String>,
}

impl GenerationOptions {
    pub fn new(project_name: ProjectName, board_id: BoardId) -> Self {
        Self {
            project_name,
            board_id,
            destination: None,
            feature_flags: Vec::new(),
        }
    }

    pub fn with_destination(mut self, destination: impl Into<PathBuf>) -> Self {
        self.destination = Some(destination.into());
        self
    }

    pub fn with_features<I, S>(mut self, flags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.feature_flags = flags.into_iter().map(Into::into).collect();
        self
    }

    /// Requested flags without duplicates, in first-occurrence order.
    pub fn requested_features(&self) -> Vec<&str> {
        let mut requested: Vec<&str> = Vec::with_capacity(self.feature_flags.len());
        for flag in &self.feature_flags {
            if !requested.contains(&flag.as_str()) {
                requested.push(flag);
            }
        }
        requested
    }
}

/// Generates ESP-IDF projects from the base template, a board and features.
pub struct ProjectGenerator {
    catalog: Box<dyn BoardCatalog>,
    registry: FeatureRegistry,
    fs: Arc<dyn Filesystem>,
    factory: ProjectFactory,
    templates_root: PathBuf,
    cwd: PathBuf,
}

impl ProjectGenerator {
    /// Create a generator with the given adapters.
    ///
    /// `cwd` anchors default and relative destinations.
    pub fn new(
        catalog: Box<dyn BoardCatalog>,
        registry: FeatureRegistry,
        fs: Arc<dyn Filesystem>,
        templates_root: impl Into<PathBuf>,
        cwd: impl Into<PathBuf>,
    ) -> Self {
        Self {
            catalog,
            registry,
            factory: ProjectFactory::new(Arc::clone(&fs)),
            fs,
            templates_root: templates_root.into(),
            cwd: cwd.into(),
        }
    }

    #[instrument(
        skip_all,
        fields(
            project = %options.project_name,
            board = %options.board_id
        )
    )]
    pub fn generate(&self, options: &GenerationOptions) -> IdfNewResult<Project> {
        let board_dir = self.catalog.validate_board(&options.board_id)?;
        info!(board_dir = %board_dir.display(), "Board resolved");

        let project = self.factory.create_project(
            &options.project_name,
            &self.templates_root,
            options.destination.as_deref(),
            &self.cwd,
        )?;
        self.factory
            .install_board(&project, &board_dir, &options.board_id)?;

        self.apply_features(&project, &options.requested_features())?;

        info!(root = %project.root().display(), "Project generated");
        Ok(project)
    }

    fn apply_features(&self, project: &Project, flags: &[&str]) -> IdfNewResult<()> {
        if flags.is_empty() {
            return Ok(());
        }

        let ctx = FeatureContext {
            project,
            fs: self.fs.as_ref(),
        };
        for flag in flags {
            let feature = self.registry.get(flag)?;
            info!(feature = feature.flag(), "Applying feature");
            feature.apply(&ctx)?;
        }
        Ok(())
    }

    pub fn list_boards(&self) -> IdfNewResult<Vec<BoardInfo>> {
        self.catalog.list_boards()
    }

    pub fn features(&self) -> &FeatureRegistry {
        &self.registry
    }
}
