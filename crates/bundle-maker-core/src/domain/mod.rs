//! Core domain layer for bundle-maker.
//!
//! This module contains pure logic with no I/O. Filesystem access and the
//! actual template rendering are reached through ports (traits) defined in
//! the application layer.
//!
//! - **No async**: everything is synchronous
//! - **No I/O**: no filesystem or network calls
//! - **Immutable values**: requests and namespaces are never mutated in place

pub mod common;
pub mod entities;
pub mod error;
pub mod value_objects;

mod validation;

pub use entities::{
    project_structure::{
        DirectoryToCreate, FileToWrite, FsEntry, KEEP_MARKER, ProjectStructure, ScaffoldReport,
    },
    render_context::RenderContext,
    request::{BUNDLES_DIR, DEFAULT_VERSION, ScaffoldRequest, ScaffoldRequestBuilder},
};

pub use error::{DomainError, ErrorCategory};

pub use value_objects::{Namespace, PackageName};

pub use common::normalize;
pub use validation::DomainValidator;
