//! Test server harness for integration testing.
//!
//! Provides `TestMockServer` for spawning real mock-server instances on
//! ephemeral ports inside the test process.

use chrono::{Duration, Utc};
use mock_veeam_service::config::Config;
use mock_veeam_service::models::TokenResponse;
use mock_veeam_service::routes::{self, AppState};
use mock_veeam_service::store::{TokenPair, TokenStore};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::task::JoinHandle;

/// Test harness for spawning the mock server in integration tests.
///
/// # Example
/// ```rust,ignore
/// let server = TestMockServer::spawn().await?;
/// let token = server.password_grant().await?;
/// let response = reqwest::Client::new()
///     .get(format!("{}/v1/backups", server.url()))
///     .bearer_auth(&token.access_token)
///     .send()
///     .await?;
/// assert_eq!(response.status(), 200);
/// ```
pub struct TestMockServer {
    addr: SocketAddr,
    state: Arc<AppState>,
    _handle: JoinHandle<()>,
}

impl TestMockServer {
    /// Spawn a test server with the default 20-second token lifetime.
    pub async fn spawn() -> Result<Self, anyhow::Error> {
        Self::spawn_with_lifetime(20).await
    }

    /// Spawn a test server with the given token lifetime in seconds.
    ///
    /// The server will:
    /// - Bind to a random available port (127.0.0.1:0)
    /// - Own a fresh, empty token store
    /// - Serve the real router in a background task
    pub async fn spawn_with_lifetime(token_lifetime_secs: u64) -> Result<Self, anyhow::Error> {
        let config = Config {
            host: "127.0.0.1".to_string(),
            port: 0,
            token_lifetime_secs,
            ..Config::default()
        };

        let state = Arc::new(AppState {
            store: TokenStore::new(),
            config,
        });

        // Build routes using the service's real route builder
        let app = routes::build_routes(state.clone());

        // Bind to random port
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .map_err(|e| anyhow::anyhow!("Failed to bind test server: {}", e))?;

        let addr = listener
            .local_addr()
            .map_err(|e| anyhow::anyhow!("Failed to get local address: {}", e))?;

        // Spawn server in background
        let handle = tokio::spawn(async move {
            if let Err(e) = axum::serve(listener, app).await {
                eprintln!("Test server error: {}", e);
            }
        });

        Ok(Self {
            addr,
            state,
            _handle: handle,
        })
    }

    /// Get the base URL of the test server
    pub fn url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Get the socket address
    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    /// Get the shared application state (store + config)
    pub fn state(&self) -> &Arc<AppState> {
        &self.state
    }

    /// Perform a password grant with the test credentials over HTTP.
    pub async fn password_grant(&self) -> Result<TokenResponse, anyhow::Error> {
        let response = reqwest::Client::new()
            .post(format!("{}/api/oauth2/token", self.url()))
            .form(&[
                ("grant_type", "password"),
                ("username", "test"),
                ("password", "test"),
            ])
            .send()
            .await?;

        if response.status() != 200 {
            anyhow::bail!("password grant failed with status {}", response.status());
        }

        Ok(response.json().await?)
    }

    /// Perform a refresh grant with the given refresh token over HTTP.
    pub async fn refresh_grant(&self, refresh_token: &str) -> Result<TokenResponse, anyhow::Error> {
        let response = reqwest::Client::new()
            .post(format!("{}/api/oauth2/token", self.url()))
            .form(&[
                ("grant_type", "refresh_token"),
                ("refresh_token", refresh_token),
            ])
            .send()
            .await?;

        if response.status() != 200 {
            anyhow::bail!("refresh grant failed with status {}", response.status());
        }

        Ok(response.json().await?)
    }

    /// Mint a token pair directly through the store, issued `age_secs`
    /// seconds in the past.
    ///
    /// With an age beyond the configured lifetime this produces an
    /// already-expired access token, so expiry paths run without sleeping
    /// through real lifetimes. The refresh token of the pair is valid
    /// regardless of age.
    pub fn issue_pair_aged(&self, age_secs: i64) -> TokenPair {
        self.state
            .store
            .issue_at(Utc::now() - Duration::seconds(age_secs))
    }
}

impl Drop for TestMockServer {
    fn drop(&mut self) {
        // Abort the HTTP server task so the port is released as soon as
        // the test completes.
        self._handle.abort();
    }
}
