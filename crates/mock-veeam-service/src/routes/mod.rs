//! HTTP routes for the mock server.
//!
//! Defines the Axum router and application state.

use crate::config::Config;
use crate::errors::MockError;
use crate::handlers;
use crate::middleware::auth;
use crate::store::TokenStore;
use axum::{
    middleware::from_fn_with_state,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// Application state shared across all handlers.
pub struct AppState {
    /// In-memory token store, owned by this server instance.
    pub store: TokenStore,

    /// Service configuration.
    pub config: Config,
}

/// Build the application routes.
///
/// Creates an Axum router with:
/// - `/health` - liveness probe, no auth
/// - `/oauth2/token`, `/api/oauth2/token` - token grants, no auth
/// - `/api/v1/serverTime`, `/v1/serverTime` - bearer-protected
/// - `/api/v1/backups`, `/v1/backups` - bearer-protected
/// - JSON 404 fallback for every other path
/// - TraceLayer for request logging
pub fn build_routes(state: Arc<AppState>) -> Router {
    // Public routes (no authentication required)
    let public_routes = Router::new()
        .route("/health", get(handlers::health_check))
        .route("/oauth2/token", post(handlers::token))
        .route("/api/oauth2/token", post(handlers::token))
        .with_state(state.clone());

    // Protected routes behind bearer validation. The real API exposes the
    // same resources with and without the /api prefix; the exporter under
    // test may use either.
    let protected_routes = Router::new()
        .route("/api/v1/serverTime", get(handlers::server_time))
        .route("/v1/serverTime", get(handlers::server_time))
        .route("/api/v1/backups", get(handlers::backups))
        .route("/v1/backups", get(handlers::backups))
        .route_layer(from_fn_with_state(state.clone(), auth::require_bearer))
        .with_state(state);

    public_routes
        .merge(protected_routes)
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
}

/// Fallback for unknown routes: 404 with the JSON error shape.
async fn not_found() -> MockError {
    MockError::NotFound
}
