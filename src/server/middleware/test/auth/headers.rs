use super::*;

/// Tests bearer extraction with the exact `Bearer ` prefix.
///
/// Expected: Some(token)
#[test]
fn extracts_bearer_token() {
    let headers = request_headers(Some("abc"), None);

    assert_eq!(bearer_token(&headers), Some("abc"));
}

/// Tests that other schemes and a lowercase prefix are rejected.
///
/// Expected: None
#[test]
fn rejects_non_bearer_schemes() {
    let mut headers = HeaderMap::new();
    headers.insert("authorization", HeaderValue::from_static("Basic abc"));
    assert_eq!(bearer_token(&headers), None);

    headers.insert("authorization", HeaderValue::from_static("bearer abc"));
    assert_eq!(bearer_token(&headers), None);

    headers.insert("authorization", HeaderValue::from_static("Bearer "));
    assert_eq!(bearer_token(&headers), None);
}

/// Tests Discord token extraction from `x-discord-token`.
///
/// Expected: Some(token) when present, None otherwise
#[test]
fn extracts_discord_token() {
    let headers = request_headers(None, Some("discord"));
    assert_eq!(discord_token(&headers), Some("discord"));

    let headers = request_headers(Some("session"), None);
    assert_eq!(discord_token(&headers), None);
}

/// Tests that ownership matches either the live or the session-derived ID.
///
/// Expected: true for both IDs, false otherwise
#[test]
fn caller_owns_either_identity() {
    let caller = Caller {
        owner_id: "111".to_string(),
        session_owner_id: Some("222".to_string()),
        discord_token: "token".to_string(),
    };

    assert!(caller.owns("111"));
    assert!(caller.owns("222"));
    assert!(!caller.owns("333"));
}
