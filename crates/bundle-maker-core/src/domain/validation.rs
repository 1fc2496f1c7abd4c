use crate::domain::{
    entities::{ProjectStructure, ScaffoldRequest},
    error::DomainError,
};

/// Centralized domain validation.
///
/// All validation logic lives here, not scattered across services.
pub struct DomainValidator;

impl DomainValidator {
    pub fn validate_request(request: &ScaffoldRequest) -> Result<(), DomainError> {
        request.validate()
    }

    pub fn validate_project_structure(structure: &ProjectStructure) -> Result<(), DomainError> {
        structure.validate()
    }
}
