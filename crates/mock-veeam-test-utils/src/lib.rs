//! # Mock Veeam Server Test Utilities
//!
//! Shared test utilities for the mock Veeam server.
//!
//! This crate provides:
//! - Server test harness (`TestMockServer` for integration tests)
//! - Grant helpers (password/refresh requests via `reqwest`)
//! - Pre-aged token issuance, so expiry paths are tested without sleeping
//!   through real lifetimes
//!
//! ## Usage
//!
//! ```rust,ignore
//! use mock_veeam_test_utils::TestMockServer;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), anyhow::Error> {
//!     let server = TestMockServer::spawn().await?;
//!     let token = server.password_grant().await?;
//!
//!     let response = reqwest::Client::new()
//!         .get(format!("{}/api/v1/backups", server.url()))
//!         .bearer_auth(&token.access_token)
//!         .send()
//!         .await?;
//!
//!     assert_eq!(response.status(), 200);
//!     Ok(())
//! }
//! ```

pub mod server_harness;

pub use server_harness::*;
