use super::*;
use serde_json::json;

/// Tests reading the whitelist of an existing row.
///
/// Expected: Ok(entries in stored order)
#[tokio::test]
async fn reads_stored_whitelist() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GuildConfig)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::guild_config::GuildConfigFactory::new(db)
        .guild_id("42")
        .owner_id("111")
        .whitelist(["beta", "alpha"])
        .build()
        .await?;

    let repo = GuildConfigRepository::new(db);
    let whitelist = repo.find_whitelist("42", "111").await?;

    assert_eq!(whitelist, vec!["beta", "alpha"]);

    Ok(())
}

/// Tests that a missing row reads as an empty whitelist.
///
/// Expected: Ok(empty)
#[tokio::test]
async fn missing_row_is_empty() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GuildConfig)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GuildConfigRepository::new(db);
    let whitelist = repo.find_whitelist("42", "111").await?;

    assert!(whitelist.is_empty());

    Ok(())
}

/// Tests that a malformed whitelist column is reported rather than discarded.
///
/// Expected: Err(DbErr::Custom)
#[tokio::test]
async fn rejects_malformed_whitelist() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GuildConfig)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::guild_config::GuildConfigFactory::new(db)
        .guild_id("42")
        .owner_id("111")
        .raw_whitelist(json!({ "alpha": true }))
        .build()
        .await?;

    let repo = GuildConfigRepository::new(db);
    let result = repo.find_whitelist("42", "111").await;

    assert!(matches!(result, Err(DbErr::Custom(_))));

    Ok(())
}
