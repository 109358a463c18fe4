//! Mock server error types.
//!
//! All errors map to HTTP status codes via the `IntoResponse` impl. The
//! response body uses the flat `{"error": <message>}` shape the exporter
//! under test expects from the real API.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Mock server error type.
///
/// Maps to the request-level error taxonomy:
/// - UnsupportedGrantType: 400 Bad Request
/// - InvalidCredentials, InvalidRefreshToken, Unauthorized: 401 Unauthorized
/// - NotFound: 404 Not Found
#[derive(Debug, Error)]
pub enum MockError {
    #[error("invalid credentials")]
    InvalidCredentials,

    #[error("invalid refresh token")]
    InvalidRefreshToken,

    #[error("unsupported grant type")]
    UnsupportedGrantType,

    #[error("unauthorized")]
    Unauthorized,

    #[error("Not found")]
    NotFound,
}

impl MockError {
    /// Returns the HTTP status code for this error.
    pub fn status_code(&self) -> u16 {
        match self {
            MockError::UnsupportedGrantType => 400,
            MockError::InvalidCredentials
            | MockError::InvalidRefreshToken
            | MockError::Unauthorized => 401,
            MockError::NotFound => 404,
        }
    }
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

impl IntoResponse for MockError {
    fn into_response(self) -> Response {
        let status = match self {
            MockError::UnsupportedGrantType => StatusCode::BAD_REQUEST,
            MockError::InvalidCredentials
            | MockError::InvalidRefreshToken
            | MockError::Unauthorized => StatusCode::UNAUTHORIZED,
            MockError::NotFound => StatusCode::NOT_FOUND,
        };

        let error_response = ErrorResponse {
            error: self.to_string(),
        };

        (status, Json(error_response)).into_response()
    }
}
