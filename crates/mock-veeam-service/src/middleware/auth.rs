//! Bearer token validation for protected routes.
//!
//! Tokens are opaque strings looked up in the in-memory store; there are
//! no claims to extract or forward. A rejection is logged with the
//! `RESULT: 401 Unauthorized` line the test driver counts.

use crate::errors::MockError;
use crate::routes::AppState;
use crate::store::AccessTokenStatus;
use axum::{
    extract::{Request, State},
    middleware::Next,
    response::IntoResponse,
};
use chrono::{Duration, Utc};
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

/// Middleware that validates the `Authorization: Bearer <token>` header.
///
/// The header must be present and carry the literal `Bearer ` prefix; the
/// remainder (trimmed) must be a known, unexpired access token. Expired
/// tokens are logged distinctly from unknown ones.
#[instrument(skip_all, name = "mock.middleware.auth")]
pub async fn require_bearer(
    State(state): State<Arc<AppState>>,
    req: Request,
    next: Next,
) -> Result<impl IntoResponse, MockError> {
    let auth_header = req
        .headers()
        .get("authorization")
        .and_then(|h| h.to_str().ok())
        .unwrap_or("");

    let Some(token) = auth_header.strip_prefix("Bearer ") else {
        debug!("Missing or non-Bearer Authorization header");
        return Err(unauthorized());
    };
    let token = token.trim();

    let lifetime = Duration::seconds(state.config.token_lifetime_secs as i64);
    match state.store.access_status(token, Utc::now(), lifetime) {
        AccessTokenStatus::Valid { elapsed_secs } => {
            info!("Token valid. Elapsed: {}s", elapsed_secs);
            Ok(next.run(req).await)
        }
        AccessTokenStatus::Expired { elapsed_secs } => {
            warn!("Token EXPIRED! Elapsed: {}s", elapsed_secs);
            Err(unauthorized())
        }
        AccessTokenStatus::Unknown => {
            warn!("Unknown token: {}", token);
            Err(unauthorized())
        }
    }
}

fn unauthorized() -> MockError {
    warn!("RESULT: 401 Unauthorized");
    MockError::Unauthorized
}
