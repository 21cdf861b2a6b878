//! Core domain layer for idf-new.
//!
//! Pure value types: board identity and metadata, project naming, feature
//! flags, and the fixed ESP-IDF layout. No I/O happens here; filesystem
//! access goes through the ports in `crate::application`.

pub mod board;
pub mod error;
pub mod feature;
pub mod layout;
pub mod paths;
pub mod project;

pub use board::{BoardId, BoardInfo, BoardMetadata, BoardScreen};
pub use error::DomainError;
pub use feature::FeatureFlag;
pub use project::{Project, ProjectName};
