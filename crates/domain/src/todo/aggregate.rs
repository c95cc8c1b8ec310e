use serde::{Deserialize, Serialize};

use super::identifier::TodoId;
use super::input::{NewTodo, TodoPatch};
use super::priority::Priority;
use crate::timestamp::Timestamp;

// =============================================================================
// Todo
// =============================================================================

/// A single task.
///
/// Serializes to `{id, title, priority, completed, createdAt}`. `id` and
/// `created_at` are fixed at creation; only `title`, `priority` and
/// `completed` change afterwards, and only through [`Todo::apply`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    pub id: TodoId,
    pub title: String,
    pub priority: Priority,
    pub completed: bool,
    pub created_at: Timestamp,
}

impl Todo {
    /// Builds a fresh, incomplete record.
    #[must_use]
    pub fn create(id: TodoId, new_todo: NewTodo, created_at: Timestamp) -> Self {
        Self {
            id,
            title: new_todo.title.into_inner(),
            priority: new_todo.priority,
            completed: false,
            created_at,
        }
    }

    /// Returns a copy with the supplied fields replaced.
    #[must_use]
    pub fn apply(&self, patch: &TodoPatch) -> Self {
        Self {
            id: self.id,
            title: patch
                .title
                .as_ref()
                .map_or_else(|| self.title.clone(), |title| title.as_str().to_string()),
            priority: patch.priority.unwrap_or(self.priority),
            completed: patch.completed.unwrap_or(self.completed),
            created_at: self.created_at,
        }
    }

    /// The patch that inverts completion.
    #[must_use]
    pub fn toggle_patch(&self) -> TodoPatch {
        TodoPatch::new().completed(!self.completed)
    }
}

/// Orders records newest first. Equal timestamps keep their relative order.
pub fn sort_newest_first(todos: &mut [Todo]) {
    todos.sort_by(|left, right| right.created_at.cmp(&left.created_at));
}

// =============================================================================
// Tests
// =============================================================================
