//! `PostgreSQL` repository.
//!
//! # Table Schema
//!
//! ```sql
//! CREATE TABLE IF NOT EXISTS todos (
//!     id UUID PRIMARY KEY,
//!     title TEXT NOT NULL CHECK (length(btrim(title)) > 0),
//!     priority TEXT NOT NULL DEFAULT 'medium'
//!         CHECK (priority IN ('low', 'medium', 'high')),
//!     completed BOOLEAN NOT NULL DEFAULT FALSE,
//!     created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
//! );
//! CREATE INDEX IF NOT EXISTS idx_todos_created_at ON todos (created_at DESC);
//! ```
//!
//! [`PostgresTodoRepository::ensure_schema`] runs these statements; the
//! factory calls it once at startup.

use chrono::{DateTime, Utc};
use futures::future::BoxFuture;
use sqlx::PgPool;
use uuid::Uuid;

use tasko_domain::{NewTodo, Priority, Timestamp, Todo, TodoId, TodoPatch};

use crate::errors::RepositoryError;
use crate::repository::TodoRepository;

const CREATE_TABLE: &str = r"
CREATE TABLE IF NOT EXISTS todos (
    id UUID PRIMARY KEY,
    title TEXT NOT NULL CHECK (length(btrim(title)) > 0),
    priority TEXT NOT NULL DEFAULT 'medium'
        CHECK (priority IN ('low', 'medium', 'high')),
    completed BOOLEAN NOT NULL DEFAULT FALSE,
    created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
)";

const CREATE_INDEX: &str =
    "CREATE INDEX IF NOT EXISTS idx_todos_created_at ON todos (created_at DESC)";

const COLUMNS: &str = "id, title, priority, completed, created_at";

/// SQLSTATE `check_violation`.
const CHECK_VIOLATION: &str = "23514";
/// SQLSTATE `not_null_violation`.
const NOT_NULL_VIOLATION: &str = "23502";

type TodoRow = (Uuid, String, String, bool, DateTime<Utc>);

// =============================================================================
// Row Conversion
// =============================================================================

fn row_to_todo(row: TodoRow) -> Result<Todo, RepositoryError> {
    let (id, title, priority, completed, created_at) = row;
    let priority = priority
        .parse::<Priority>()
        .map_err(|error| RepositoryError::Serialization(format!("row {id}: {error}")))?;

    Ok(Todo {
        id: TodoId::from_uuid(id),
        title,
        priority,
        completed,
        created_at: Timestamp::from_datetime(created_at),
    })
}

/// Maps constraint violations to [`RepositoryError::Validation`] and
/// everything else to [`RepositoryError::Database`].
fn classify(code: Option<&str>, message: String) -> RepositoryError {
    match code {
        Some(CHECK_VIOLATION | NOT_NULL_VIOLATION) => RepositoryError::Validation(message),
        _ => RepositoryError::Database(message),
    }
}

fn database_error(error: &sqlx::Error) -> RepositoryError {
    let code = error
        .as_database_error()
        .and_then(|database| database.code());
    classify(code.as_deref(), error.to_string())
}

// =============================================================================
// PostgresTodoRepository
// =============================================================================

#[derive(Debug, Clone)]
pub struct PostgresTodoRepository {
    pool: PgPool,
}

impl PostgresTodoRepository {
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Creates the `todos` table and its ordering index if they are missing.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::Database`] when either statement fails.
    pub async fn ensure_schema(&self) -> Result<(), RepositoryError> {
        sqlx::query(CREATE_TABLE)
            .execute(&self.pool)
            .await
            .map_err(|error| database_error(&error))?;
        sqlx::query(CREATE_INDEX)
            .execute(&self.pool)
            .await
            .map_err(|error| database_error(&error))?;

        tracing::debug!("todos schema ready");
        Ok(())
    }
}

impl TodoRepository for PostgresTodoRepository {
    fn insert(&self, new_todo: NewTodo) -> BoxFuture<'_, Result<Todo, RepositoryError>> {
        Box::pin(async move {
            let todo = Todo::create(TodoId::generate(), new_todo, Timestamp::now());

            let row: TodoRow = sqlx::query_as(&format!(
                "INSERT INTO todos ({COLUMNS}) VALUES ($1, $2, $3, $4, $5) RETURNING {COLUMNS}"
            ))
            .bind(todo.id.as_uuid())
            .bind(&todo.title)
            .bind(todo.priority.as_str())
            .bind(todo.completed)
            .bind(*todo.created_at.as_datetime())
            .fetch_one(&self.pool)
            .await
            .map_err(|error| database_error(&error))?;

            row_to_todo(row)
        })
    }

    fn list(&self) -> BoxFuture<'_, Result<Vec<Todo>, RepositoryError>> {
        Box::pin(async move {
            // Ids are time-ordered, so they break creation-time ties by
            // insertion order.
            let rows: Vec<TodoRow> = sqlx::query_as(&format!(
                "SELECT {COLUMNS} FROM todos ORDER BY created_at DESC, id DESC"
            ))
            .fetch_all(&self.pool)
            .await
            .map_err(|error| database_error(&error))?;

            rows.into_iter().map(row_to_todo).collect()
        })
    }

    fn find_by_id(&self, id: TodoId) -> BoxFuture<'_, Result<Option<Todo>, RepositoryError>> {
        Box::pin(async move {
            let row: Option<TodoRow> =
                sqlx::query_as(&format!("SELECT {COLUMNS} FROM todos WHERE id = $1"))
                    .bind(id.as_uuid())
                    .fetch_optional(&self.pool)
                    .await
                    .map_err(|error| database_error(&error))?;

            row.map(row_to_todo).transpose()
        })
    }

    fn update(
        &self,
        id: TodoId,
        patch: TodoPatch,
    ) -> BoxFuture<'_, Result<Todo, RepositoryError>> {
        Box::pin(async move {
            let row: Option<TodoRow> = sqlx::query_as(&format!(
                "UPDATE todos SET \
                     title = COALESCE($2, title), \
                     priority = COALESCE($3, priority), \
                     completed = COALESCE($4, completed) \
                 WHERE id = $1 RETURNING {COLUMNS}"
            ))
            .bind(id.as_uuid())
            .bind(patch.title.as_ref().map(|title| title.as_str().to_string()))
            .bind(patch.priority.map(|priority| priority.as_str().to_string()))
            .bind(patch.completed)
            .fetch_optional(&self.pool)
            .await
            .map_err(|error| database_error(&error))?;

            row.map_or_else(|| Err(RepositoryError::not_found(&id)), row_to_todo)
        })
    }

    fn delete(&self, id: TodoId) -> BoxFuture<'_, Result<(), RepositoryError>> {
        Box::pin(async move {
            let result = sqlx::query("DELETE FROM todos WHERE id = $1")
                .bind(id.as_uuid())
                .execute(&self.pool)
                .await
                .map_err(|error| database_error(&error))?;

            if result.rows_affected() == 0 {
                return Err(RepositoryError::not_found(&id));
            }
            Ok(())
        })
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use tasko_domain::Title;

    // -------------------------------------------------------------------------
    // Row Mapping (no DB connection required)
    // -------------------------------------------------------------------------

    #[rstest]
    fn row_to_todo_maps_columns() {
        let id = Uuid::now_v7();
        let created_at = Utc::now();

        let todo = row_to_todo((id, "Buy milk".to_string(), "high".to_string(), true, created_at))
            .unwrap();

        assert_eq!(todo.id, TodoId::from_uuid(id));
        assert_eq!(todo.title, "Buy milk");
        assert_eq!(todo.priority, Priority::High);
        assert!(todo.completed);
        assert_eq!(todo.created_at, Timestamp::from_datetime(created_at));
    }

    #[rstest]
    fn row_to_todo_rejects_unknown_priority() {
        let result = row_to_todo((
            Uuid::now_v7(),
            "Buy milk".to_string(),
            "urgent".to_string(),
            false,
            Utc::now(),
        ));

        assert!(matches!(result, Err(RepositoryError::Serialization(_))));
    }

    #[rstest]
    #[case(Some("23514"), true)]
    #[case(Some("23502"), true)]
    #[case(Some("23505"), false)]
    #[case(None, false)]
    fn classify_constraint_violations(#[case] code: Option<&str>, #[case] is_validation: bool) {
        let error = classify(code, "boom".to_string());

        assert_eq!(
            matches!(error, RepositoryError::Validation(_)),
            is_validation
        );
    }

    #[rstest]
    fn connection_failures_are_database_errors() {
        let error = database_error(&sqlx::Error::PoolTimedOut);

        assert!(matches!(error, RepositoryError::Database(_)));
    }

    // -------------------------------------------------------------------------
    // Integration (requires PostgreSQL)
    // -------------------------------------------------------------------------

    async fn repository() -> PostgresTodoRepository {
        let database_url =
            std::env::var("DATABASE_URL").unwrap_or_else(|_| "postgres://localhost/test".into());
        let pool = PgPool::connect(&database_url).await.unwrap();
        let repository = PostgresTodoRepository::new(pool);
        repository.ensure_schema().await.unwrap();
        repository
    }

    fn new_todo(title: &str) -> NewTodo {
        NewTodo::new(Title::new(title).unwrap())
    }

    #[rstest]
    #[tokio::test]
    #[ignore = "Requires PostgreSQL instance"]
    async fn insert_then_find() {
        let repository = repository().await;

        let todo = repository
            .insert(new_todo("Buy milk").with_priority(Priority::Low))
            .await
            .unwrap();
        let found = repository.find_by_id(todo.id).await.unwrap();

        assert_eq!(found, Some(todo.clone()));
        repository.delete(todo.id).await.unwrap();
    }

    #[rstest]
    #[tokio::test]
    #[ignore = "Requires PostgreSQL instance"]
    async fn list_returns_newest_first() {
        let repository = repository().await;
        let older = repository.insert(new_todo("older")).await.unwrap();
        let newer = repository.insert(new_todo("newer")).await.unwrap();

        let ids: Vec<TodoId> = repository
            .list()
            .await
            .unwrap()
            .into_iter()
            .map(|todo| todo.id)
            .filter(|id| *id == older.id || *id == newer.id)
            .collect();

        assert_eq!(ids, [newer.id, older.id]);
        repository.delete(older.id).await.unwrap();
        repository.delete(newer.id).await.unwrap();
    }

    #[rstest]
    #[tokio::test]
    #[ignore = "Requires PostgreSQL instance"]
    async fn update_coalesces_absent_fields() {
        let repository = repository().await;
        let todo = repository.insert(new_todo("Buy milk")).await.unwrap();

        let updated = repository
            .update(todo.id, TodoPatch::new().completed(true))
            .await
            .unwrap();

        assert!(updated.completed);
        assert_eq!(updated.title, "Buy milk");
        assert_eq!(updated.priority, Priority::Medium);
        repository.delete(todo.id).await.unwrap();
    }

    #[rstest]
    #[tokio::test]
    #[ignore = "Requires PostgreSQL instance"]
    async fn update_and_delete_missing_are_not_found() {
        let repository = repository().await;
        let id = TodoId::generate();

        let update = repository.update(id, TodoPatch::new().completed(true)).await;
        let delete = repository.delete(id).await;

        assert!(update.unwrap_err().is_not_found());
        assert!(delete.unwrap_err().is_not_found());
    }
}
