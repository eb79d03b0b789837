use super::*;
use sea_orm::{EntityTrait, PaginatorTrait};

/// Tests that upserting creates a row when none exists.
///
/// Expected: Ok with a new row holding the whitelist
#[tokio::test]
async fn creates_missing_row() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GuildConfig)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GuildConfigRepository::new(db);
    repo.upsert_whitelist("42", "111", &["alpha".to_string()])
        .await?;

    let config = repo.find("42", "111").await?.unwrap();
    assert_eq!(config.whitelist, vec!["alpha"]);
    assert!(!config.approved);

    Ok(())
}

/// Tests that upserting only replaces the whitelist of an existing row.
///
/// Expected: Ok with whitelist replaced and other columns untouched
#[tokio::test]
async fn updates_only_whitelist() -> Result<(), DbErr> {
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
        .whitelist(["old"])
        .blacklisted(["gamma"])
        .build()
        .await?;

    let repo = GuildConfigRepository::new(db);
    repo.upsert_whitelist("42", "111", &["new".to_string()])
        .await?;

    let config = repo.find("42", "111").await?.unwrap();
    assert_eq!(config.whitelist, vec!["new"]);
    assert!(config.approved);
    assert_eq!(config.server_invite.as_deref(), Some("https://discord.gg/abc"));
    assert_eq!(config.blacklisted, vec!["gamma"]);

    let count = entity::prelude::GuildConfig::find().count(db).await?;
    assert_eq!(count, 1);

    Ok(())
}

/// Tests that another owner's row for the same guild is left alone.
///
/// Expected: Ok with two rows, each keeping its own whitelist
#[tokio::test]
async fn keeps_rows_of_other_owners() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GuildConfig)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::guild_config::GuildConfigFactory::new(db)
        .guild_id("42")
        .owner_id("222")
        .whitelist(["theirs"])
        .build()
        .await?;

    let repo = GuildConfigRepository::new(db);
    repo.upsert_whitelist("42", "111", &["mine".to_string()])
        .await?;

    assert_eq!(repo.find_whitelist("42", "222").await?, vec!["theirs"]);
    assert_eq!(repo.find_whitelist("42", "111").await?, vec!["mine"]);

    Ok(())
}
