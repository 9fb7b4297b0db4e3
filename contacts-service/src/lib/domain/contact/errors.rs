use thiserror::Error;

/// Top-level error for contact operations.
#[derive(Debug, Clone, Error)]
pub enum ContactError {
    #[error("Contact not found: {0}")]
    NotFound(String),

    #[error("Database error: {0}")]
    DatabaseError(String),
}
