use serde::Serialize;

use super::priority::Priority;
use crate::errors::ValidationError;

// =============================================================================
// Title
// =============================================================================

/// Trimmed, non-empty task text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Title(String);

impl Title {
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptyTitle`] when nothing but whitespace remains.
    pub fn new(value: impl AsRef<str>) -> Result<Self, ValidationError> {
        let trimmed = value.as_ref().trim();
        if trimmed.is_empty() {
            return Err(ValidationError::EmptyTitle);
        }
        Ok(Self(trimmed.to_string()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl std::fmt::Display for Title {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.write_str(&self.0)
    }
}

// =============================================================================
// NewTodo
// =============================================================================

/// Everything the caller decides about a todo at creation time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTodo {
    pub title: Title,
    pub priority: Priority,
}

impl NewTodo {
    #[must_use]
    pub fn new(title: Title) -> Self {
        Self {
            title,
            priority: Priority::default(),
        }
    }

    #[must_use]
    pub fn with_priority(self, priority: Priority) -> Self {
        Self { priority, ..self }
    }

    /// Validates raw request fields.
    ///
    /// A missing priority falls back to [`Priority::Medium`].
    ///
    /// # Errors
    ///
    /// Returns the first failing field: the title is checked before the priority.
    pub fn parse(title: Option<&str>, priority: Option<&str>) -> Result<Self, ValidationError> {
        let title = Title::new(title.ok_or(ValidationError::MissingTitle)?)?;
        let priority = priority.map(str::parse::<Priority>).transpose()?.unwrap_or_default();
        Ok(Self { title, priority })
    }
}

// =============================================================================
// TodoPatch
// =============================================================================

/// A partial update: `None` fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoPatch {
    pub title: Option<Title>,
    pub priority: Option<Priority>,
    pub completed: Option<bool>,
}

impl TodoPatch {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn title(self, title: Title) -> Self {
        Self {
            title: Some(title),
            ..self
        }
    }

    #[must_use]
    pub fn priority(self, priority: Priority) -> Self {
        Self {
            priority: Some(priority),
            ..self
        }
    }

    #[must_use]
    pub fn completed(self, completed: bool) -> Self {
        Self {
            completed: Some(completed),
            ..self
        }
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.title.is_none() && self.priority.is_none() && self.completed.is_none()
    }

    /// Validates raw request fields. Absent fields stay `None`.
    ///
    /// # Errors
    ///
    /// Fails on a blank title or an unknown priority.
    pub fn parse(
        title: Option<&str>,
        priority: Option<&str>,
        completed: Option<bool>,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            title: title.map(Title::new).transpose()?,
            priority: priority.map(str::parse::<Priority>).transpose()?,
            completed,
        })
    }
}

// =============================================================================
// Tests
// =============================================================================
