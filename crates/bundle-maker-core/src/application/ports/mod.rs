//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `bundle-maker-adapters` implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `Filesystem`: directory creation and file writes
//!   - `BundleRenderer`: request -> bundle layout
//!
//! - **Driving (Input) Ports**: Called by external world, implemented by application
//!   - (Defined in CLI layer, implemented by services)

pub mod output;

pub use output::{BundleRenderer, Filesystem};

#[cfg(test)]
pub use output::{MockBundleRenderer, MockFilesystem};
