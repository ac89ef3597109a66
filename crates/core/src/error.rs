use crate::types::PlantId;
use crate::validation::ValidationErrors;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("{entity} with id {id} was not found")]
    NotFound { entity: &'static str, id: PlantId },

    #[error("Validation failed: {0}")]
    Validation(ValidationErrors),

    #[error("Mapping failed: {0}")]
    Mapping(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Internal error: {0}")]
    Internal(String),
}
