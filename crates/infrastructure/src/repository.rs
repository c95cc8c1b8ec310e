use futures::future::BoxFuture;

use tasko_domain::{NewTodo, Todo, TodoId, TodoPatch};

use crate::errors::RepositoryError;

// =============================================================================
// TodoRepository
// =============================================================================

/// The todo collection.
///
/// Methods return boxed futures so the trait stays object safe and handlers
/// can hold an `Arc<dyn TodoRepository>` chosen at runtime.
///
/// There is no cross-record transaction: each call is one atomic operation
/// on one record (or a read of all of them), and concurrent updates to the
/// same record resolve last-write-wins.
pub trait TodoRepository: Send + Sync {
    /// Stores a new record. The repository assigns `id` and `created_at`;
    /// `completed` starts `false`.
    fn insert(&self, new_todo: NewTodo) -> BoxFuture<'_, Result<Todo, RepositoryError>>;

    /// All records, newest first. Records created in the same instant are
    /// returned most-recently-inserted first.
    fn list(&self) -> BoxFuture<'_, Result<Vec<Todo>, RepositoryError>>;

    /// Looks up one record.
    fn find_by_id(&self, id: TodoId) -> BoxFuture<'_, Result<Option<Todo>, RepositoryError>>;

    /// Applies `patch` to the record and returns the stored result.
    ///
    /// Fails with [`RepositoryError::NotFound`] when no record has `id`.
    fn update(
        &self,
        id: TodoId,
        patch: TodoPatch,
    ) -> BoxFuture<'_, Result<Todo, RepositoryError>>;

    /// Removes the record.
    ///
    /// Fails with [`RepositoryError::NotFound`] when no record has `id`.
    fn delete(&self, id: TodoId) -> BoxFuture<'_, Result<(), RepositoryError>>;
}
