//! GPS support overlay.
//!
//! Assets in `features/gps/`:
//!
//! ```text
//! gps.c, gps.h   copied into main/ when present
//! Kconfig        appended to main/Kconfig.projbuild
//! ```

use std::path::PathBuf;

use tracing::{instrument, warn};

use idf_new_core::{
    application::{Feature, FeatureContext, ProjectEditor},
    domain::layout,
    error::IdfNewResult,
};

/// Sources copied verbatim into `main/`.
const SOURCES: [&str; 2] = ["gps.c", "gps.h"];

#[derive(Debug, Clone)]
pub struct GpsFeature {
    assets_dir: PathBuf,
}

impl GpsFeature {
    pub const FLAG: &'static str = "gps";

    pub fn new(assets_dir: impl Into<PathBuf>) -> Self {
        Self {
            assets_dir: assets_dir.into(),
        }
    }

    fn merge_kconfig(&self, ctx: &FeatureContext<'_>) -> IdfNewResult<()> {
        let snippet_path = self.assets_dir.join(layout::KCONFIG_SNIPPET);
        if !ctx.fs.is_file(&snippet_path) {
            warn!(path = %snippet_path.display(), "GPS Kconfig snippet missing, skipping");
            return Ok(());
        }

        let snippet = ctx.fs.read_to_string(&snippet_path)?;
        let snippet = snippet.trim_end();
        let target = ctx.main_dir().join(layout::KCONFIG_PROJBUILD);

        let merged = if ctx.fs.is_file(&target) {
            let existing = ctx.fs.read_to_string(&target)?;
            format!("{}\n\n{}\n", existing.trim_end(), snippet)
        } else {
            format!("{snippet}\n")
        };

        ctx.fs.write_file(&target, &merged)
    }
}

impl Feature for GpsFeature {
    fn name(&self) -> &str {
        "GPS support"
    }

    fn flag(&self) -> &str {
        Self::FLAG
    }

    #[instrument(skip_all, fields(assets = %self.assets_dir.display()))]
    fn apply(&self, ctx: &FeatureContext<'_>) -> IdfNewResult<()> {
        let editor = ProjectEditor::new(ctx.project, ctx.fs);

        for name in SOURCES {
            let source = self.assets_dir.join(name);
            if !ctx.fs.is_file(&source) {
                warn!(path = %source.display(), "GPS asset missing, skipping");
                continue;
            }
            editor.copy_into_main(&source, None)?;
        }

        self.merge_kconfig(ctx)
    }
}
