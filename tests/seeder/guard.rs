//! Behavior against a store that already holds data.

use seeder_test_utils::prelude::*;

use event_seeder::{
    data::{EventRepository, MissionRepository, ParticipationRepository, RewardRepository},
    error::Error,
    seeder::{SeedOptions, Seeder},
};

/// Expect a non-wipe run against a non-empty store to refuse and write nothing
#[tokio::test]
async fn refuses_non_empty_store_without_wipe() -> Result<(), TestError> {
    let test = test_setup_with_event_tables!()?;
    let unrelated = factory::insert_unrelated_event(&test.db).await?;

    let result = Seeder::new(&test.db).run(&SeedOptions { wipe: false }).await;

    assert!(matches!(result, Err(Error::StoreNotEmpty { rows: 1 })));

    // Nothing was written and the pre-existing event survived.
    let event_repo = EventRepository::new(&test.db);
    assert_eq!(event_repo.count().await?, 1);
    assert!(event_repo.get_by_id(unrelated.id).await?.is_some());
    assert_eq!(MissionRepository::new(&test.db).count().await?, 0);
    assert_eq!(RewardRepository::new(&test.db).count().await?, 0);

    Ok(())
}

/// Expect leftover participation rows alone to trigger the guard
#[tokio::test]
async fn refuses_store_with_only_participations() -> Result<(), TestError> {
    let test = test_setup_with_event_tables!()?;
    let unrelated = factory::insert_unrelated_event(&test.db).await?;
    factory::insert_participation(&test.db, unrelated.id, "user-1").await?;
    EventRepository::new(&test.db).clear().await?;

    let result = Seeder::new(&test.db).run(&SeedOptions { wipe: false }).await;

    assert!(matches!(result, Err(Error::StoreNotEmpty { .. })));

    Ok(())
}

/// Expect a wipe run to delete unrelated rows sharing the tables
#[tokio::test]
async fn wipe_removes_unrelated_data() -> Result<(), TestError> {
    let test = test_setup_with_event_tables!()?;
    let unrelated = factory::insert_unrelated_event(&test.db).await?;
    factory::insert_participation(&test.db, unrelated.id, "user-1").await?;

    let summary = Seeder::new(&test.db)
        .run(&SeedOptions { wipe: true })
        .await
        .expect("wipe run should succeed");

    // The unrelated event is gone; the unscoped reset removed it together
    // with its participation row. Only the freshly seeded event remains.
    let event_repo = EventRepository::new(&test.db);
    assert_eq!(event_repo.count().await?, 1);
    let survivor = event_repo
        .get_by_id(summary.event_id)
        .await?
        .expect("seeded event should exist");
    assert_ne!(survivor.name, unrelated.name);
    assert_eq!(ParticipationRepository::new(&test.db).count().await?, 0);
    assert_eq!(summary.mission_count(), 3);
    assert_eq!(summary.reward_count(), 5);

    Ok(())
}
