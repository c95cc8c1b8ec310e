//! Routing for the todo API.

use axum::Router;
use axum::http::{HeaderValue, Method};
use axum::routing::get;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

// =============================================================================
// CORS
// =============================================================================

/// Which browser origins may call the API.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CorsConfig {
    /// `None` allows any origin.
    pub allowed_origin: Option<HeaderValue>,
}

impl CorsConfig {
    #[must_use]
    pub const fn any_origin() -> Self {
        Self {
            allowed_origin: None,
        }
    }

    #[must_use]
    pub const fn single_origin(origin: HeaderValue) -> Self {
        Self {
            allowed_origin: Some(origin),
        }
    }

    fn layer(&self) -> CorsLayer {
        let layer = CorsLayer::new()
            .allow_methods([
                Method::GET,
                Method::POST,
                Method::PATCH,
                Method::DELETE,
                Method::OPTIONS,
            ])
            .allow_headers(Any);

        match &self.allowed_origin {
            Some(origin) => layer.allow_origin(origin.clone()),
            None => layer.allow_origin(Any),
        }
    }
}

// =============================================================================
// Router Creation
// =============================================================================

/// Builds the application router.
///
/// ```ignore
/// let router = create_router(AppState::in_memory(), &CorsConfig::any_origin());
/// let listener = tokio::net::TcpListener::bind("0.0.0.0:5000").await?;
/// axum::serve(listener, router).await?;
/// ```
pub fn create_router(state: AppState, cors: &CorsConfig) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        .route(
            "/api/todos",
            get(handlers::list_todos).post(handlers::create_todo),
        )
        .route(
            "/api/todos/{id}",
            get(handlers::get_todo)
                .patch(handlers::update_todo)
                .delete(handlers::delete_todo),
        )
        .layer(TraceLayer::new_for_http())
        .layer(cors.layer())
        .with_state(state)
}

// =============================================================================
// Tests
// =============================================================================
