//! Health check handler.
//!
//! Liveness probe used by test orchestration to decide the server is up.
//! No authentication; the log file is guaranteed to exist by the time this
//! endpoint first answers, because logging is initialized before the
//! listener is bound.

use crate::models::HealthResponse;
use axum::Json;
use tracing::instrument;

/// Handler for GET /health. Always 200 `{"ok":true}`.
#[instrument(skip_all, name = "mock.health.check")]
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse { ok: true })
}
