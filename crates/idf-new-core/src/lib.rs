//! idf-new Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the idf-new
//! ESP-IDF project generator, following hexagonal (ports and adapters)
//! architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           idf-new-cli (CLI)             │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │  (ProjectGenerator, ProjectFactory)     │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │  (Filesystem, BoardCatalog, Feature)    │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │     idf-new-adapters (Infrastructure)   │
//! │ (LocalFilesystem, FilesystemBoardCatalog│
//! │  GpsFeature, ...)                       │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use idf_new_core::prelude::*;
//!
//! let options = GenerationOptions::new(
//!     ProjectName::parse("demo")?,
//!     BoardId::parse("espressif/devkitc")?,
//! )
//! .with_features(["gps"]);
//!
//! // catalog, registry and filesystem come from idf-new-adapters
//! let generator = ProjectGenerator::new(catalog, registry, fs, templates_root, cwd);
//! let project = generator.generate(&options)?;
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        ApplicationError, FeatureRegistry, GenerationOptions, ProjectEditor, ProjectFactory,
        ProjectGenerator, Replacements,
        ports::{BoardCatalog, Feature, FeatureContext, Filesystem},
    };
    pub use crate::domain::{
        BoardId, BoardInfo, BoardMetadata, BoardScreen, DomainError, FeatureFlag, Project,
        ProjectName,
    };
    pub use crate::error::{ErrorCategory, IdfNewError, IdfNewResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
