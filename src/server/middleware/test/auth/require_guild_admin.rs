use super::*;

fn caller() -> Caller {
    Caller {
        owner_id: "111".to_string(),
        session_owner_id: None,
        discord_token: DISCORD_TOKEN.to_string(),
    }
}

/// Tests that the administrator bit grants access.
///
/// Expected: Ok(())
#[tokio::test]
async fn grants_admin_of_guild() {
    let config = UpstreamConfig::new().with_guilds(vec![
        discord::partial_guild("41", "Other", discord::NOT_ADMIN),
        discord::partial_guild("42", "Target", discord::ADMIN),
    ]);
    let fixture = GuardFixture::start(config).await;

    let result = fixture.guard().require_guild_admin(&caller(), "42").await;

    assert_eq!(result, Ok(()));
}

/// Tests that high permission bits do not hide the administrator bit.
///
/// Expected: Ok(()) for 0x100000008
#[tokio::test]
async fn grants_admin_with_high_bits() {
    let config = UpstreamConfig::new().with_guilds(vec![discord::partial_guild(
        "42",
        "Target",
        "4294967304",
    )]);
    let fixture = GuardFixture::start(config).await;

    let result = fixture.guard().require_guild_admin(&caller(), "42").await;

    assert_eq!(result, Ok(()));
}

/// Tests that membership without the administrator bit is forbidden.
///
/// Expected: Err(AuthError::Forbidden)
#[tokio::test]
async fn denies_member_without_admin_bit() {
    let config = UpstreamConfig::new().with_guilds(vec![discord::partial_guild(
        "42",
        "Target",
        discord::NOT_ADMIN,
    )]);
    let fixture = GuardFixture::start(config).await;

    let result = fixture.guard().require_guild_admin(&caller(), "42").await;

    assert_eq!(result, Err(AuthError::Forbidden));
}

/// Tests that admin rights on a different guild do not carry over.
///
/// Expected: Err(AuthError::Forbidden)
#[tokio::test]
async fn denies_guild_not_listed() {
    let config = UpstreamConfig::new().with_guilds(vec![discord::partial_guild(
        "41",
        "Other",
        discord::ADMIN,
    )]);
    let fixture = GuardFixture::start(config).await;

    let result = fixture.guard().require_guild_admin(&caller(), "42").await;

    assert_eq!(result, Err(AuthError::Forbidden));
}

/// Tests that a failing Discord call fails closed.
///
/// Expected: Err(AuthError::Forbidden)
#[tokio::test]
async fn fails_closed_when_discord_errors() {
    let fixture = GuardFixture::start(UpstreamConfig::new().guilds_unavailable()).await;

    let result = fixture.guard().require_guild_admin(&caller(), "42").await;

    assert_eq!(result, Err(AuthError::Forbidden));
}

/// Tests that an unexpected guild list shape fails closed.
///
/// Expected: Err(AuthError::Forbidden)
#[tokio::test]
async fn fails_closed_on_malformed_guild_list() {
    let config = UpstreamConfig::new().with_raw_guilds(json!({ "message": "rate limited" }));
    let fixture = GuardFixture::start(config).await;

    let result = fixture.guard().require_guild_admin(&caller(), "42").await;

    assert_eq!(result, Err(AuthError::Forbidden));
}
