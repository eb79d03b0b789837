use super::*;

/// Tests that a request without a bearer token is rejected before any upstream call.
///
/// Expected: Err(AuthError::Unauthorized) and zero stub hits
#[tokio::test]
async fn rejects_missing_bearer_without_upstream_calls() {
    let fixture = GuardFixture::start(UpstreamConfig::new()).await;

    let result = fixture
        .guard()
        .authenticate(&request_headers(None, Some(DISCORD_TOKEN)))
        .await;

    assert_eq!(result, Err(AuthError::Unauthorized));
    assert_eq!(fixture.stub.hits(), 0);
}

/// Tests that a session token rejected by the auth provider is unauthorized.
///
/// Expected: Err(AuthError::Unauthorized)
#[tokio::test]
async fn rejects_invalid_session() {
    let fixture = GuardFixture::start(UpstreamConfig::new()).await;

    let result = fixture
        .guard()
        .authenticate(&request_headers(Some("expired"), Some(DISCORD_TOKEN)))
        .await;

    assert_eq!(result, Err(AuthError::Unauthorized));
}

/// Tests that an unreachable auth provider is treated as an invalid session.
///
/// Expected: Err(AuthError::Unauthorized)
#[tokio::test]
async fn rejects_when_auth_provider_unreachable() {
    let http_client = reqwest::Client::new();
    // Port 9 (discard) on localhost is not served by anything in tests
    let auth_client = SupabaseAuthClient::new(
        http_client.clone(),
        "http://127.0.0.1:9".to_string(),
        "service-key".to_string(),
    );
    let discord_client = DiscordClient::new(http_client, "http://127.0.0.1:9".to_string());

    let result = AuthGuard::new(&auth_client, &discord_client)
        .authenticate(&valid_headers())
        .await;

    assert_eq!(result, Err(AuthError::Unauthorized));
}

/// Tests that a valid session without a Discord token gets a distinct error.
///
/// Expected: Err(AuthError::MissingDiscordToken)
#[tokio::test]
async fn requires_discord_token() {
    let fixture = GuardFixture::start(UpstreamConfig::new()).await;

    let result = fixture
        .guard()
        .authenticate(&request_headers(Some(SESSION_TOKEN), None))
        .await;

    assert_eq!(result, Err(AuthError::MissingDiscordToken));
}

/// Tests that the live Discord ID takes precedence over session metadata.
///
/// Expected: Ok(Caller) with owner_id from Discord and session_owner_id from metadata
#[tokio::test]
async fn prefers_live_discord_id() {
    let config = UpstreamConfig::new()
        .with_discord_user(discord::current_user("999"))
        .with_session_user(upstream::session_user(
            json!({ "provider_id": "111" }),
            json!([]),
        ));
    let fixture = GuardFixture::start(config).await;

    let caller = fixture.guard().authenticate(&valid_headers()).await.unwrap();

    assert_eq!(caller.owner_id, "999");
    assert_eq!(caller.session_owner_id.as_deref(), Some("111"));
    assert_eq!(caller.discord_token, DISCORD_TOKEN);
}

/// Tests fallback to session metadata when Discord rejects the token.
///
/// Expected: Ok(Caller) with owner_id from `user_metadata.sub`
#[tokio::test]
async fn falls_back_to_session_metadata() {
    let config = UpstreamConfig::new()
        .discord_user_unavailable()
        .with_session_user(upstream::session_user(json!({ "sub": "222" }), json!([])));
    let fixture = GuardFixture::start(config).await;

    let caller = fixture.guard().authenticate(&valid_headers()).await.unwrap();

    assert_eq!(caller.owner_id, "222");
}

/// Tests fallback when Discord returns a non-numeric ID.
///
/// Expected: Ok(Caller) with owner_id from the first identity
#[tokio::test]
async fn ignores_non_numeric_discord_id() {
    let config = UpstreamConfig::new()
        .with_discord_user(json!({ "id": "not-a-number" }))
        .with_session_user(upstream::session_user(json!({}), json!([{ "id": "333" }])));
    let fixture = GuardFixture::start(config).await;

    let caller = fixture.guard().authenticate(&valid_headers()).await.unwrap();

    assert_eq!(caller.owner_id, "333");
}

/// Tests that no resolvable ID anywhere yields a distinct error.
///
/// Expected: Err(AuthError::MissingOwnerId)
#[tokio::test]
async fn rejects_unresolvable_owner() {
    let config = UpstreamConfig::new()
        .discord_user_unavailable()
        .with_session_user(upstream::session_user(json!({}), json!([])));
    let fixture = GuardFixture::start(config).await;

    let result = fixture.guard().authenticate(&valid_headers()).await;

    assert_eq!(result, Err(AuthError::MissingOwnerId));
}
