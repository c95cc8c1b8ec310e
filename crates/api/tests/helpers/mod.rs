#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use axum::http::{Method, Request, StatusCode, header};
use futures::future::BoxFuture;
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use std::sync::Arc;

use tasko_api::routes::{CorsConfig, create_router};
use tasko_api::state::AppState;
use tasko_domain::{NewTodo, Todo, TodoId, TodoPatch};
use tasko_infrastructure::{RepositoryError, TodoRepository};

// =============================================================================
// Router Fixtures
// =============================================================================

pub fn in_memory_router() -> Router {
    create_router(AppState::in_memory(), &CorsConfig::any_origin())
}

pub fn router_with(repository: Arc<dyn TodoRepository>) -> Router {
    create_router(AppState::new(repository), &CorsConfig::any_origin())
}

// =============================================================================
// Request Helpers
// =============================================================================

pub struct TestResponse {
    pub status: StatusCode,
    pub body: Value,
}

/// Sends one request through the router. A `Value::Null` body is omitted.
pub async fn send(router: &Router, method: Method, uri: &str, body: Value) -> TestResponse {
    let builder = Request::builder().method(method).uri(uri);
    let request = if body.is_null() {
        builder.body(Body::empty()).unwrap()
    } else {
        builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    };

    into_test_response(router.clone().oneshot(request).await.unwrap()).await
}

/// Sends a raw body with a JSON content type.
pub async fn send_raw(router: &Router, method: Method, uri: &str, raw: &str) -> TestResponse {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(raw.to_string()))
        .unwrap();

    into_test_response(router.clone().oneshot(request).await.unwrap()).await
}

async fn into_test_response(response: axum::response::Response) -> TestResponse {
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    TestResponse { status, body }
}

pub async fn create(router: &Router, body: Value) -> Value {
    let response = send(router, Method::POST, "/api/todos", body).await;
    assert_eq!(response.status, StatusCode::CREATED, "{}", response.body);
    response.body
}

// =============================================================================
// FailingRepository
// =============================================================================

/// Every operation fails with a database error.
pub struct FailingRepository;

impl FailingRepository {
    fn failure<T: Send + 'static>() -> BoxFuture<'static, Result<T, RepositoryError>> {
        Box::pin(async { Err(RepositoryError::Database("connection reset".to_string())) })
    }
}

impl TodoRepository for FailingRepository {
    fn insert(&self, _new_todo: NewTodo) -> BoxFuture<'_, Result<Todo, RepositoryError>> {
        Self::failure()
    }

    fn list(&self) -> BoxFuture<'_, Result<Vec<Todo>, RepositoryError>> {
        Self::failure()
    }

    fn find_by_id(&self, _id: TodoId) -> BoxFuture<'_, Result<Option<Todo>, RepositoryError>> {
        Self::failure()
    }

    fn update(
        &self,
        _id: TodoId,
        _patch: TodoPatch,
    ) -> BoxFuture<'_, Result<Todo, RepositoryError>> {
        Self::failure()
    }

    fn delete(&self, _id: TodoId) -> BoxFuture<'_, Result<(), RepositoryError>> {
        Self::failure()
    }
}

/// Rejects writes the way a database constraint would.
pub struct ConstraintRepository;

impl TodoRepository for ConstraintRepository {
    fn insert(&self, _new_todo: NewTodo) -> BoxFuture<'_, Result<Todo, RepositoryError>> {
        Box::pin(async {
            Err(RepositoryError::Validation(
                "new row violates check constraint".to_string(),
            ))
        })
    }

    fn list(&self) -> BoxFuture<'_, Result<Vec<Todo>, RepositoryError>> {
        Box::pin(async { Ok(Vec::new()) })
    }

    fn find_by_id(&self, _id: TodoId) -> BoxFuture<'_, Result<Option<Todo>, RepositoryError>> {
        Box::pin(async { Ok(None) })
    }

    fn update(
        &self,
        id: TodoId,
        _patch: TodoPatch,
    ) -> BoxFuture<'_, Result<Todo, RepositoryError>> {
        Box::pin(async move { Err(RepositoryError::not_found(&id)) })
    }

    fn delete(&self, id: TodoId) -> BoxFuture<'_, Result<(), RepositoryError>> {
        Box::pin(async move { Err(RepositoryError::not_found(&id)) })
    }
}
