//! Error types for the entity store

use crate::state::EntityKind;
use thiserror::Error;

/// Result type for store operations
pub type Result<T> = std::result::Result<T, StoreError>;

/// Errors raised while reading or writing entities
#[derive(Debug, Error, PartialEq)]
pub enum StoreError {
    /// No entity with this id
    #[error("{kind} not found: {id}")]
    NotFound { kind: EntityKind, id: String },

    /// A submitted form value could not be converted to the record's type
    #[error("invalid value for '{field}': {message}")]
    InvalidValue { field: String, message: String },
}
