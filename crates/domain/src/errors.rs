use thiserror::Error;

// =============================================================================
// ValidationError
// =============================================================================

/// Reasons a caller-supplied value cannot become part of a [`crate::Todo`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Title is required")]
    MissingTitle,

    #[error("Title must not be empty")]
    EmptyTitle,

    #[error("Priority must be one of low, medium, high (got `{0}`)")]
    UnknownPriority(String),

    #[error("`{0}` is not a valid todo id")]
    InvalidIdentifier(String),
}

impl ValidationError {
    /// Name of the offending field. The HTTP layer logs it with each rejection.
    #[must_use]
    pub const fn field(&self) -> &'static str {
        match self {
            Self::MissingTitle | Self::EmptyTitle => "title",
            Self::UnknownPriority(_) => "priority",
            Self::InvalidIdentifier(_) => "id",
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
