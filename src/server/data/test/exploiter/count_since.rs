use super::*;

/// Tests that the lower bound is inclusive.
///
/// Verifies that an event exactly at the cutoff is counted while one a millisecond
/// earlier is not.
///
/// Expected: Ok(1)
#[tokio::test]
async fn includes_events_at_cutoff() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::ExploiterEvent)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let cutoff = Utc.with_ymd_and_hms(2026, 10, 15, 12, 0, 0).unwrap();
    factory::create_event_at(db, "42", "ban", cutoff).await?;
    factory::create_event_at(db, "42", "ban", cutoff - Duration::milliseconds(1)).await?;

    let repo = ExploiterEventRepository::new(db);
    let count = repo.count_since("42", Some("ban"), cutoff).await?;

    assert_eq!(count, 1);

    Ok(())
}

/// Tests filtering by action and counting all actions.
///
/// Expected: Ok with separate ban/safe counts and a total including other actions
#[tokio::test]
async fn counts_by_action() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::ExploiterEvent)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let cutoff = Utc.with_ymd_and_hms(2026, 10, 15, 12, 0, 0).unwrap();
    let later = cutoff + Duration::minutes(5);
    factory::create_event_at(db, "42", "ban", later).await?;
    factory::create_event_at(db, "42", "ban", later).await?;
    factory::create_event_at(db, "42", "safe", later).await?;
    factory::create_event_at(db, "42", "kick", later).await?;

    let repo = ExploiterEventRepository::new(db);

    assert_eq!(repo.count_since("42", Some("ban"), cutoff).await?, 2);
    assert_eq!(repo.count_since("42", Some("safe"), cutoff).await?, 1);
    assert_eq!(repo.count_since("42", None, cutoff).await?, 4);

    Ok(())
}

/// Tests that events from other guilds are excluded.
///
/// Expected: Ok(0)
#[tokio::test]
async fn ignores_other_guilds() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::ExploiterEvent)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let cutoff = Utc.with_ymd_and_hms(2026, 10, 15, 12, 0, 0).unwrap();
    factory::create_event_at(db, "43", "ban", cutoff + Duration::minutes(1)).await?;

    let repo = ExploiterEventRepository::new(db);
    let count = repo.count_since("42", None, cutoff).await?;

    assert_eq!(count, 0);

    Ok(())
}
