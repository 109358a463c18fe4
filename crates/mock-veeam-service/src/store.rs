//! In-memory token store.
//!
//! Two insertion-only maps (access token -> issue time, refresh token ->
//! issue time) shared for the lifetime of the process. The store is owned
//! by the server state and passed explicitly into handlers; there is no
//! process-global state.
//!
//! Every operation takes the current time as an argument, so the validity
//! of a token is a pure function of the store contents and the clock.

use chrono::{DateTime, Duration, Utc};
use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};
use uuid::Uuid;

/// A freshly issued access/refresh token pair.
#[derive(Debug, Clone)]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
}

/// Validation outcome for a presented access token.
///
/// `Expired` is reported separately from `Unknown` so the two cases can be
/// logged distinctly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessTokenStatus {
    /// Token exists and is within its lifetime. Carries the elapsed
    /// seconds since issuance.
    Valid { elapsed_secs: i64 },
    /// Token exists but its lifetime has elapsed.
    Expired { elapsed_secs: i64 },
    /// Token was never issued by this process.
    Unknown,
}

/// Thread-safe token store with insertion-only semantics.
///
/// Issuance is atomic with respect to validation: a token pair returned to
/// a caller is already visible in both maps.
#[derive(Debug, Default)]
pub struct TokenStore {
    access: RwLock<HashMap<String, DateTime<Utc>>>,
    refresh: RwLock<HashMap<String, DateTime<Utc>>>,
}

impl TokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mint a new access/refresh pair recorded at `now`.
    ///
    /// Token identifiers are UUID-derived rather than wall-clock-derived,
    /// so two issuances in the same instant never collide.
    pub fn issue_at(&self, now: DateTime<Utc>) -> TokenPair {
        let pair = TokenPair {
            access_token: format!("access-{}", Uuid::new_v4().simple()),
            refresh_token: format!("refresh-{}", Uuid::new_v4().simple()),
        };

        self.access
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(pair.access_token.clone(), now);
        self.refresh
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(pair.refresh_token.clone(), now);

        pair
    }

    /// Whether `token` was issued as a refresh token by this process.
    ///
    /// Refresh tokens never expire and are never invalidated, so presence
    /// in the map is the whole check.
    pub fn refresh_token_known(&self, token: &str) -> bool {
        self.refresh
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .contains_key(token)
    }

    /// Classify a presented access token against `now` and `lifetime`.
    pub fn access_status(
        &self,
        token: &str,
        now: DateTime<Utc>,
        lifetime: Duration,
    ) -> AccessTokenStatus {
        let issued_at = match self
            .access
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(token)
        {
            Some(issued_at) => *issued_at,
            None => return AccessTokenStatus::Unknown,
        };

        let elapsed = now - issued_at;
        if elapsed > lifetime {
            AccessTokenStatus::Expired {
                elapsed_secs: elapsed.num_seconds(),
            }
        } else {
            AccessTokenStatus::Valid {
                elapsed_secs: elapsed.num_seconds(),
            }
        }
    }

    /// Number of access tokens ever issued.
    pub fn access_token_count(&self) -> usize {
        self.access
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}
