//! bundle-maker Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for generating
//! Symfony bundle skeletons, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │         bundle-maker-cli (CLI)          │
//! │  (collects input, wires the adapters)   │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │            (ScaffoldService)            │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │       Application Ports (Traits)        │
//! │      (BundleRenderer, Filesystem)       │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    bundle-maker-adapters (Infra)        │
//! │ (SymfonyBundleRenderer, LocalFilesystem)│
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use bundle_maker_core::prelude::*;
//!
//! let request = ScaffoldRequest::builder()
//!     .bundle_name("Blog")
//!     .vendor_name("Acme")
//!     .build()?;
//!
//! let service = ScaffoldService::new(renderer, filesystem);
//! let report = service.generate(&request, ".")?;
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        ScaffoldService,
        ports::{BundleRenderer, Filesystem},
    };
    pub use crate::domain::{
        Namespace, PackageName, ProjectStructure, RenderContext, ScaffoldReport, ScaffoldRequest,
    };
    pub use crate::error::{BundleMakerError, BundleMakerResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
