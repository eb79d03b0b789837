use super::*;

/// Tests the full gate for an admin caller.
///
/// Expected: Ok(Caller) with owner_id "111"
#[tokio::test]
async fn authorizes_admin_caller() {
    let config = UpstreamConfig::new().with_guilds(vec![discord::partial_guild(
        "42",
        "Target",
        discord::ADMIN,
    )]);
    let fixture = GuardFixture::start(config).await;

    let caller = fixture.guard().authorize(&valid_headers(), "42").await.unwrap();

    assert_eq!(caller.owner_id, upstream::OWNER_ID);
}

/// Tests that an earlier stage failure short-circuits the guild check.
///
/// Expected: Err(AuthError::MissingDiscordToken) with only the session lookup made
#[tokio::test]
async fn stops_at_first_failing_stage() {
    let config = UpstreamConfig::new().with_guilds(vec![discord::partial_guild(
        "42",
        "Target",
        discord::ADMIN,
    )]);
    let fixture = GuardFixture::start(config).await;

    let result = fixture
        .guard()
        .authorize(&request_headers(Some(SESSION_TOKEN), None), "42")
        .await;

    assert_eq!(result, Err(AuthError::MissingDiscordToken));
    assert_eq!(fixture.stub.hits(), 1);
}
