//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `idf-new-adapters` implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `Filesystem`: File operations
//!   - `BoardCatalog`: Board discovery and resolution
//!   - `Feature`: Optional overlays applied to a generated project
//!
//! - **Driving (Input) Ports**: Called by external world, implemented by application
//!   - (Defined in CLI layer, implemented by services)

pub mod output;

pub use output::{BoardCatalog, Feature, FeatureContext, Filesystem};

#[cfg(test)]
pub use output::{MockBoardCatalog, MockFilesystem};
