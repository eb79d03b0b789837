use super::*;

/// Tests reading a guild's precomputed counts.
///
/// Expected: Ok(Some(AllTimeCounts))
#[tokio::test]
async fn reads_stats_row() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::ExploiterStats)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_stats(db, "42", 5, 3).await?;
    factory::create_stats(db, "43", 100, 100).await?;

    let repo = ExploiterStatsRepository::new(db);
    let counts = repo.find_by_guild_id("42").await?.unwrap();

    assert_eq!(counts.exploiters, 5);
    assert_eq!(counts.safe, 3);
    assert_eq!(counts.total(), 8);

    Ok(())
}

/// Tests that a guild without a stats row yields nothing.
///
/// Expected: Ok(None)
#[tokio::test]
async fn missing_row_is_none() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::ExploiterStats)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ExploiterStatsRepository::new(db);
    let counts = repo.find_by_guild_id("42").await?;

    assert!(counts.is_none());

    Ok(())
}
