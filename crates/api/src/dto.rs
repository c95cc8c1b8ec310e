//! Request and response bodies.
//!
//! Todo records themselves are serialized straight from
//! [`tasko_domain::Todo`]; only the envelopes live here.

use serde::{Deserialize, Serialize};

use tasko_domain::{NewTodo, TodoPatch, ValidationError};

// =============================================================================
// Requests
// =============================================================================

/// Body of `POST /api/todos`.
///
/// Fields stay raw so a missing title surfaces as a domain validation error
/// rather than a deserialization failure.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateTodoRequest {
    pub title: Option<String>,
    pub priority: Option<String>,
}

impl CreateTodoRequest {
    /// # Errors
    ///
    /// Returns the domain error for a missing or blank title or an unknown
    /// priority.
    pub fn into_new_todo(self) -> Result<NewTodo, ValidationError> {
        NewTodo::parse(self.title.as_deref(), self.priority.as_deref())
    }
}

/// Body of `PATCH /api/todos/{id}`. Absent fields are left unchanged.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateTodoRequest {
    pub title: Option<String>,
    pub priority: Option<String>,
    pub completed: Option<bool>,
}

impl UpdateTodoRequest {
    /// # Errors
    ///
    /// Returns the domain error for a blank title or an unknown priority.
    pub fn into_patch(self) -> Result<TodoPatch, ValidationError> {
        TodoPatch::parse(
            self.title.as_deref(),
            self.priority.as_deref(),
            self.completed,
        )
    }
}

// =============================================================================
// Responses
// =============================================================================

/// `{"message": "..."}`, used for confirmations and every error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

impl HealthResponse {
    #[must_use]
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use tasko_domain::Priority;

    mod create_todo_request {
        use super::*;

        #[rstest]
        fn title_only_defaults_priority() {
            let request: CreateTodoRequest =
                serde_json::from_str(r#"{"title": "Buy milk"}"#).unwrap();

            let new_todo = request.into_new_todo().unwrap();

            assert_eq!(new_todo.title.as_str(), "Buy milk");
            assert_eq!(new_todo.priority, Priority::Medium);
        }

        #[rstest]
        fn unknown_fields_are_ignored() {
            let request: CreateTodoRequest =
                serde_json::from_str(r#"{"title": "x", "priority": "high", "colour": "red"}"#)
                    .unwrap();

            assert_eq!(request.into_new_todo().unwrap().priority, Priority::High);
        }

        #[rstest]
        #[case(r"{}", ValidationError::MissingTitle)]
        #[case(r#"{"title": null}"#, ValidationError::MissingTitle)]
        #[case(r#"{"title": "   "}"#, ValidationError::EmptyTitle)]
        #[case(
            r#"{"title": "x", "priority": "urgent"}"#,
            ValidationError::UnknownPriority("urgent".to_string())
        )]
        fn invalid_bodies(#[case] json: &str, #[case] expected: ValidationError) {
            let request: CreateTodoRequest = serde_json::from_str(json).unwrap();

            assert_eq!(request.into_new_todo(), Err(expected));
        }
    }

    mod update_todo_request {
        use super::*;

        #[rstest]
        fn empty_body_is_empty_patch() {
            let request: UpdateTodoRequest = serde_json::from_str("{}").unwrap();

            assert!(request.into_patch().unwrap().is_empty());
        }

        #[rstest]
        fn completed_only() {
            let request: UpdateTodoRequest =
                serde_json::from_str(r#"{"completed": true}"#).unwrap();

            let patch = request.into_patch().unwrap();

            assert_eq!(patch.completed, Some(true));
            assert!(patch.title.is_none());
            assert!(patch.priority.is_none());
        }

        #[rstest]
        fn wrong_completed_type_fails_to_deserialize() {
            let result = serde_json::from_str::<UpdateTodoRequest>(r#"{"completed": "yes"}"#);

            assert!(result.is_err());
        }
    }

    #[rstest]
    fn health_reports_crate_version() {
        let health = HealthResponse::healthy();

        assert_eq!(health.status, "healthy");
        assert_eq!(health.version, env!("CARGO_PKG_VERSION"));
    }
}
