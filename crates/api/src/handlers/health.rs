use axum::Json;

use crate::dto::HealthResponse;

// =============================================================================
// Health Check Handler
// =============================================================================

pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
