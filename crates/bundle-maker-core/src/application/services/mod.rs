//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! high-level use cases like "generate a bundle".

pub mod scaffold_service;

pub use scaffold_service::ScaffoldService;
