//! Token endpoint handler.
//!
//! POST /oauth2/token and POST /api/oauth2/token accept a form-encoded
//! grant request and dispatch on `grant_type`.

use crate::errors::MockError;
use crate::models::{TokenRequest, TokenResponse};
use crate::routes::AppState;
use crate::services::token_service;
use axum::{extract::State, Form, Json};
use chrono::Utc;
use std::sync::Arc;
use tracing::{info, instrument};

/// Handle a token grant request.
///
/// - `grant_type=password` with the test credential pair mints a fresh
///   access/refresh pair.
/// - `grant_type=refresh_token` with a previously issued refresh token
///   does the same; the old refresh token stays usable.
/// - Anything else is a 400.
#[instrument(skip_all, name = "mock.auth.token")]
pub async fn token(
    State(state): State<Arc<AppState>>,
    Form(payload): Form<TokenRequest>,
) -> Result<Json<TokenResponse>, MockError> {
    let grant_type = payload.grant_type.as_deref().unwrap_or("");
    info!("Grant type: {}", grant_type);

    let lifetime = state.config.token_lifetime_secs;
    let now = Utc::now();

    let response = match grant_type {
        "password" => token_service::password_grant(
            &state.store,
            lifetime,
            payload.username.as_deref(),
            payload.password.as_deref(),
            now,
        )?,
        "refresh_token" => token_service::refresh_grant(
            &state.store,
            lifetime,
            payload.refresh_token.as_deref(),
            now,
        )?,
        _ => return Err(MockError::UnsupportedGrantType),
    };

    Ok(Json(response))
}
