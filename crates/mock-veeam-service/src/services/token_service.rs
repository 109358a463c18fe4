//! Grant business logic for the token endpoint.
//!
//! Two grant types are supported: `password` (only the literal test
//! credential pair succeeds) and `refresh_token` (any refresh token this
//! process issued, with no single-use restriction). Both mint a fresh
//! access/refresh pair through the shared store.

use crate::errors::MockError;
use crate::models::TokenResponse;
use crate::store::TokenStore;
use chrono::{DateTime, Utc};
use tracing::info;

/// The only credential pair the mock accepts.
const TEST_USERNAME: &str = "test";
const TEST_PASSWORD: &str = "test";

/// Issue a token pair via the password grant.
///
/// Both fields must be present and equal to the test pair; anything else
/// is an authentication failure and issues nothing.
pub fn password_grant(
    store: &TokenStore,
    lifetime_secs: u64,
    username: Option<&str>,
    password: Option<&str>,
    now: DateTime<Utc>,
) -> Result<TokenResponse, MockError> {
    info!("Username: {}", username.unwrap_or(""));

    match (username, password) {
        (Some(TEST_USERNAME), Some(TEST_PASSWORD)) => {}
        _ => return Err(MockError::InvalidCredentials),
    }

    let pair = store.issue_at(now);
    info!("NEW TOKEN CREATED: {}", pair.access_token);

    Ok(token_response(pair, lifetime_secs))
}

/// Issue a token pair via the refresh-token grant.
///
/// The presented refresh token must have been issued by this process. The
/// old refresh token is NOT invalidated; refresh tokens are multi-use.
pub fn refresh_grant(
    store: &TokenStore,
    lifetime_secs: u64,
    refresh_token: Option<&str>,
    now: DateTime<Utc>,
) -> Result<TokenResponse, MockError> {
    let presented = refresh_token.unwrap_or("");
    info!("Refresh token received: {}", presented);

    if !store.refresh_token_known(presented) {
        return Err(MockError::InvalidRefreshToken);
    }

    let pair = store.issue_at(now);
    info!("TOKEN REFRESHED: {}", pair.access_token);

    Ok(token_response(pair, lifetime_secs))
}

fn token_response(pair: crate::store::TokenPair, lifetime_secs: u64) -> TokenResponse {
    TokenResponse {
        access_token: pair.access_token,
        refresh_token: pair.refresh_token,
        expires_in: lifetime_secs,
        token_type: "Bearer".to_string(),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::store::AccessTokenStatus;
    use chrono::Duration;

    #[test]
    fn test_password_grant_success() {
        let store = TokenStore::new();
        let now = Utc::now();

        let response = password_grant(&store, 20, Some("test"), Some("test"), now).unwrap();

        assert_eq!(response.token_type, "Bearer");
        assert_eq!(response.expires_in, 20);
        assert!(matches!(
            store.access_status(&response.access_token, now, Duration::seconds(20)),
            AccessTokenStatus::Valid { .. }
        ));
        assert!(store.refresh_token_known(&response.refresh_token));
    }

    #[test]
    fn test_password_grant_rejects_wrong_credentials() {
        let store = TokenStore::new();
        let now = Utc::now();

        let result = password_grant(&store, 20, Some("test"), Some("wrong"), now);

        assert!(matches!(result, Err(MockError::InvalidCredentials)));
        assert_eq!(store.access_token_count(), 0);
    }

    #[test]
    fn test_password_grant_rejects_missing_fields() {
        let store = TokenStore::new();
        let now = Utc::now();

        assert!(matches!(
            password_grant(&store, 20, Some("test"), None, now),
            Err(MockError::InvalidCredentials)
        ));
        assert!(matches!(
            password_grant(&store, 20, None, Some("test"), now),
            Err(MockError::InvalidCredentials)
        ));
        assert!(matches!(
            password_grant(&store, 20, None, None, now),
            Err(MockError::InvalidCredentials)
        ));
        assert_eq!(store.access_token_count(), 0);
    }

    #[test]
    fn test_refresh_grant_with_known_token() {
        let store = TokenStore::new();
        let now = Utc::now();

        let first = password_grant(&store, 20, Some("test"), Some("test"), now).unwrap();
        let second = refresh_grant(&store, 20, Some(&first.refresh_token), now).unwrap();

        assert_ne!(second.access_token, first.access_token);
        assert!(matches!(
            store.access_status(&second.access_token, now, Duration::seconds(20)),
            AccessTokenStatus::Valid { .. }
        ));
    }

    #[test]
    fn test_refresh_grant_rejects_unknown_token() {
        let store = TokenStore::new();
        let now = Utc::now();

        let result = refresh_grant(&store, 20, Some("refresh-unknown"), now);

        assert!(matches!(result, Err(MockError::InvalidRefreshToken)));
        assert_eq!(store.access_token_count(), 0);
    }

    #[test]
    fn test_refresh_grant_rejects_missing_token() {
        let store = TokenStore::new();

        let result = refresh_grant(&store, 20, None, Utc::now());

        assert!(matches!(result, Err(MockError::InvalidRefreshToken)));
    }

    #[test]
    fn test_refresh_token_is_multi_use() {
        let store = TokenStore::new();
        let now = Utc::now();

        let first = password_grant(&store, 20, Some("test"), Some("test"), now).unwrap();

        // The old refresh token stays usable after a refresh.
        refresh_grant(&store, 20, Some(&first.refresh_token), now).unwrap();
        let again = refresh_grant(&store, 20, Some(&first.refresh_token), now);

        assert!(again.is_ok());
    }

    #[test]
    fn test_expires_in_tracks_configured_lifetime() {
        let store = TokenStore::new();

        let response =
            password_grant(&store, 60, Some("test"), Some("test"), Utc::now()).unwrap();

        assert_eq!(response.expires_in, 60);
    }
}
