use thiserror::Error;

use tasko_domain::TodoId;

/// Failures reported by a [`crate::TodoRepository`].
///
/// The three-way split (not found, validation, everything else) is what the
/// HTTP layer maps onto 404, 400 and 500.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("Todo not found: {0}")]
    NotFound(String),

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl RepositoryError {
    #[must_use]
    pub fn not_found(id: &TodoId) -> Self {
        Self::NotFound(id.to_string())
    }

    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}
