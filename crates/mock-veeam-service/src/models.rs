use serde::{Deserialize, Serialize};

/// Token endpoint request body (`application/x-www-form-urlencoded`).
///
/// All fields are optional at the wire level; which ones are required
/// depends on the grant type, and the grant logic reports the precise
/// failure (400 vs 401) instead of letting deserialization reject the
/// request.
#[derive(Debug, Deserialize)]
pub struct TokenRequest {
    pub grant_type: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
    pub refresh_token: Option<String>,
}

/// Token response (OAuth 2.0 compliant)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub expires_in: u64,
    pub token_type: String,
}

/// One entry of the fixed backups list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Backup {
    pub name: String,
    #[serde(rename = "platformName")]
    pub platform_name: String,
}

/// Backups list response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackupsResponse {
    pub data: Vec<Backup>,
}

/// Server time response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerTimeResponse {
    #[serde(rename = "serverTime")]
    pub server_time: String,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub ok: bool,
}

/// The fixed two-entry backup list every authorized request receives.
pub fn backup_fixtures() -> Vec<Backup> {
    vec![
        Backup {
            name: "backup1".to_string(),
            platform_name: "VmWare".to_string(),
        },
        Backup {
            name: "backup2".to_string(),
            platform_name: "HyperV".to_string(),
        },
    ]
}
