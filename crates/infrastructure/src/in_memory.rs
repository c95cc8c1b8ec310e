//! In-memory repository.
//!
//! Records live in a `Vec` behind `Arc<RwLock<...>>`, in insertion order.
//! Nothing survives a restart, which makes this the default for local
//! development and the backing store for HTTP-level tests.

use std::sync::Arc;

use futures::future::BoxFuture;
use tokio::sync::RwLock;

use tasko_domain::{NewTodo, Timestamp, Todo, TodoId, TodoPatch, sort_newest_first};

use crate::errors::RepositoryError;
use crate::repository::TodoRepository;

// =============================================================================
// InMemoryTodoRepository
// =============================================================================

#[derive(Debug, Clone, Default)]
pub struct InMemoryTodoRepository {
    todos: Arc<RwLock<Vec<Todo>>>,
}

impl InMemoryTodoRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the store with existing records, oldest first.
    #[must_use]
    pub fn with_todos(todos: Vec<Todo>) -> Self {
        Self {
            todos: Arc::new(RwLock::new(todos)),
        }
    }
}

#[allow(clippy::significant_drop_tightening)]
impl TodoRepository for InMemoryTodoRepository {
    fn insert(&self, new_todo: NewTodo) -> BoxFuture<'_, Result<Todo, RepositoryError>> {
        Box::pin(async move {
            let todo = Todo::create(TodoId::generate(), new_todo, Timestamp::now());
            let mut guard = self.todos.write().await;
            guard.push(todo.clone());
            Ok(todo)
        })
    }

    fn list(&self) -> BoxFuture<'_, Result<Vec<Todo>, RepositoryError>> {
        Box::pin(async move {
            let guard = self.todos.read().await;
            // Reverse insertion order first so the stable sort breaks ties
            // most-recently-inserted first.
            let mut todos: Vec<Todo> = guard.iter().rev().cloned().collect();
            sort_newest_first(&mut todos);
            Ok(todos)
        })
    }

    fn find_by_id(&self, id: TodoId) -> BoxFuture<'_, Result<Option<Todo>, RepositoryError>> {
        Box::pin(async move {
            let guard = self.todos.read().await;
            Ok(guard.iter().find(|todo| todo.id == id).cloned())
        })
    }

    fn update(
        &self,
        id: TodoId,
        patch: TodoPatch,
    ) -> BoxFuture<'_, Result<Todo, RepositoryError>> {
        Box::pin(async move {
            let mut guard = self.todos.write().await;
            let slot = guard
                .iter_mut()
                .find(|todo| todo.id == id)
                .ok_or_else(|| RepositoryError::not_found(&id))?;
            *slot = slot.apply(&patch);
            Ok(slot.clone())
        })
    }

    fn delete(&self, id: TodoId) -> BoxFuture<'_, Result<(), RepositoryError>> {
        Box::pin(async move {
            let mut guard = self.todos.write().await;
            let position = guard
                .iter()
                .position(|todo| todo.id == id)
                .ok_or_else(|| RepositoryError::not_found(&id))?;
            guard.remove(position);
            Ok(())
        })
    }
}

// =============================================================================
// Tests
// =============================================================================
