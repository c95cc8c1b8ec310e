use std::sync::Arc;

use tasko_infrastructure::{InMemoryTodoRepository, TodoRepository};

/// Shared handler state.
///
/// The repository is injected so tests can supply their own store or a
/// failing double.
#[derive(Clone)]
pub struct AppState {
    pub repository: Arc<dyn TodoRepository>,
}

impl AppState {
    #[must_use]
    pub fn new(repository: Arc<dyn TodoRepository>) -> Self {
        Self { repository }
    }

    /// State backed by a fresh, empty in-memory store.
    #[must_use]
    pub fn in_memory() -> Self {
        Self::new(Arc::new(InMemoryTodoRepository::new()))
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("AppState")
            .field("repository", &"Arc<dyn TodoRepository>")
            .finish()
    }
}
