//! Token lifecycle integration tests.
//!
//! Replays the exporter's re-authentication story: scrape without a token,
//! log in, reuse the token inside its lifetime, hit expiry, recover via
//! the refresh grant. Expiry is produced by minting pre-aged pairs through
//! the store instead of sleeping through real lifetimes.

use mock_veeam_test_utils::TestMockServer;

async fn backups_status(server: &TestMockServer, token: Option<&str>) -> Result<u16, anyhow::Error> {
    let mut request = reqwest::Client::new().get(format!("{}/api/v1/backups", server.url()));
    if let Some(token) = token {
        request = request.bearer_auth(token);
    }
    Ok(request.send().await?.status().as_u16())
}

/// A token issued within its lifetime keeps validating; one aged past the
/// lifetime fails strictly after.
#[tokio::test]
async fn test_token_valid_within_lifetime_expired_after() -> Result<(), anyhow::Error> {
    let server = TestMockServer::spawn().await?;

    // 8 seconds old, 20-second lifetime: still valid.
    let fresh = server.issue_pair_aged(8);
    assert_eq!(backups_status(&server, Some(&fresh.access_token)).await?, 200);

    // 22 seconds old: expired.
    let stale = server.issue_pair_aged(22);
    assert_eq!(backups_status(&server, Some(&stale.access_token)).await?, 401);

    Ok(())
}

/// The refresh token of an expired pair still mints a working access
/// token. This is the recovery path the exporter depends on.
#[tokio::test]
async fn test_refresh_recovers_from_expiry() -> Result<(), anyhow::Error> {
    let server = TestMockServer::spawn().await?;

    let stale = server.issue_pair_aged(25);
    assert_eq!(backups_status(&server, Some(&stale.access_token)).await?, 401);

    let renewed = server.refresh_grant(&stale.refresh_token).await?;
    assert_ne!(renewed.access_token, stale.access_token);
    assert_eq!(
        backups_status(&server, Some(&renewed.access_token)).await?,
        200
    );

    Ok(())
}

/// The full end-to-end sequence: unauthenticated 401, password grant,
/// in-lifetime reuse, expiry 401, refresh grant, recovery.
#[tokio::test]
async fn test_end_to_end_reauthentication_flow() -> Result<(), anyhow::Error> {
    let server = TestMockServer::spawn().await?;

    // (1) No token yet: 401.
    assert_eq!(backups_status(&server, None).await?, 401);

    // (2) Password grant.
    let token = server.password_grant().await?;

    // (3) Immediate request succeeds.
    assert_eq!(backups_status(&server, Some(&token.access_token)).await?, 200);

    // (4) Reuse inside the lifetime window: an 8-second-old pair stands in
    // for the same token a few scrapes later.
    let mid_life = server.issue_pair_aged(8);
    assert_eq!(
        backups_status(&server, Some(&mid_life.access_token)).await?,
        200
    );

    // (5) 22 seconds after issuance the token is expired.
    let expired = server.issue_pair_aged(22);
    assert_eq!(
        backups_status(&server, Some(&expired.access_token)).await?,
        401
    );

    // (6) Refresh grant with the original refresh token.
    let renewed = server.refresh_grant(&token.refresh_token).await?;

    // (7) The new token works.
    assert_eq!(
        backups_status(&server, Some(&renewed.access_token)).await?,
        200
    );

    Ok(())
}

/// A shorter configured lifetime shifts the expiry boundary with it.
#[tokio::test]
async fn test_configured_lifetime_moves_expiry() -> Result<(), anyhow::Error> {
    let server = TestMockServer::spawn_with_lifetime(5).await?;

    let token = server.password_grant().await?;
    assert_eq!(token.expires_in, 5);

    // 8 seconds old would be fine under the default lifetime, but not
    // under 5 seconds.
    let stale = server.issue_pair_aged(8);
    assert_eq!(backups_status(&server, Some(&stale.access_token)).await?, 401);

    Ok(())
}
