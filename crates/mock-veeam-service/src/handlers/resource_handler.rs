//! Protected resource handlers.
//!
//! Both handlers run behind the bearer-validation middleware; by the time
//! they execute the presented token has already been accepted.

use crate::models::{backup_fixtures, BackupsResponse, ServerTimeResponse};
use axum::Json;
use chrono::Local;
use tracing::{info, instrument};

/// Handler for GET /api/v1/serverTime and GET /v1/serverTime.
///
/// Returns the current wall-clock time as a local `YYYY-MM-DDTHH:MM:SS`
/// timestamp.
#[instrument(skip_all, name = "mock.resource.server_time")]
pub async fn server_time() -> Json<ServerTimeResponse> {
    let response = ServerTimeResponse {
        server_time: Local::now().format("%Y-%m-%dT%H:%M:%S").to_string(),
    };
    info!("RESULT: 200 OK (serverTime)");
    Json(response)
}

/// Handler for GET /api/v1/backups and GET /v1/backups.
///
/// Returns the fixed two-entry backup list.
#[instrument(skip_all, name = "mock.resource.backups")]
pub async fn backups() -> Json<BackupsResponse> {
    info!("RESULT: 200 OK (backups)");
    Json(BackupsResponse {
        data: backup_fixtures(),
    })
}
