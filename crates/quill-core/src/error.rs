//! Domain-level error types.

use thiserror::Error;

use crate::domain::validation::{PublishError, SignupError};

/// Domain errors - business rule failures.
#[derive(Debug, Error)]
pub enum DomainError {
    /// A lookup by external key found nothing.
    #[error("{entity_type} not found: {key}")]
    NotFound {
        entity_type: &'static str,
        key: String,
    },

    /// Malformed request input (bad page number, unparsable id).
    #[error("{0}")]
    InvalidInput(String),

    #[error(transparent)]
    Publish(#[from] PublishError),

    #[error(transparent)]
    Signup(#[from] SignupError),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Repository-level errors.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Database connection failed: {0}")]
    Connection(String),

    #[error("Query execution failed: {0}")]
    Query(String),

    #[error("Entity not found")]
    NotFound,

    #[error("Constraint violation: {0}")]
    Constraint(String),

    /// A stored document could not be decoded into its domain type.
    #[error("Corrupt record: {0}")]
    Corrupt(String),
}
