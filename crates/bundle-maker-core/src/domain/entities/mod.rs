pub mod project_structure;
pub mod render_context;
pub mod request;

pub use crate::domain::DomainError;
pub use project_structure::{ProjectStructure, ScaffoldReport};
pub use render_context::RenderContext;
pub use request::{ScaffoldRequest, ScaffoldRequestBuilder};
