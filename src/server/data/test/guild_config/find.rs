use super::*;

/// Tests finding an existing configuration.
///
/// Verifies that all columns are converted, including JSON list columns.
///
/// Expected: Ok(Some(GuildConfig))
#[tokio::test]
async fn finds_existing_config() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GuildConfig)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::guild_config::GuildConfigFactory::new(db)
        .guild_id("42")
        .owner_id("111")
        .approved(true)
        .server_invite("https://discord.gg/abc")
        .whitelist(["alpha", "beta"])
        .blacklisted(["gamma"])
        .default_channel("555")
        .build()
        .await?;

    let repo = GuildConfigRepository::new(db);
    let config = repo.find("42", "111").await?.unwrap();

    assert_eq!(config.guild_id, "42");
    assert!(config.approved);
    assert_eq!(config.server_invite.as_deref(), Some("https://discord.gg/abc"));
    assert_eq!(config.whitelist, vec!["alpha", "beta"]);
    assert_eq!(config.blacklisted, vec!["gamma"]);
    assert_eq!(config.default_channel.as_deref(), Some("555"));

    Ok(())
}

/// Tests that a row owned by someone else is not returned.
///
/// Expected: Ok(None)
#[tokio::test]
async fn ignores_other_owners() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GuildConfig)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_guild_config(db, "42", "222").await?;

    let repo = GuildConfigRepository::new(db);
    let config = repo.find("42", "111").await?;

    assert!(config.is_none());

    Ok(())
}

/// Tests that NULL columns come back as defaults.
///
/// Expected: Ok(Some(GuildConfig)) with approved=false and empty lists
#[tokio::test]
async fn defaults_null_columns() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GuildConfig)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_guild_config(db, "42", "111").await?;

    let repo = GuildConfigRepository::new(db);
    let config = repo.find("42", "111").await?.unwrap();

    assert!(!config.approved);
    assert!(config.whitelist.is_empty());
    assert!(config.blacklisted.is_empty());
    assert!(config.server_invite.is_none());

    Ok(())
}
