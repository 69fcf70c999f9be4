use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    /// The supplied identifier does not parse as a store key at all.
    /// Distinct from [`CoreError::NotFound`] so callers can answer 400
    /// instead of 404 before the store is ever consulted.
    #[error("Invalid {entity} id format: {value}")]
    InvalidId { entity: &'static str, value: String },
}
