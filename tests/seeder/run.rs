//! End-to-end seeding runs against an in-memory store.

use seeder_test_utils::prelude::*;

use event_seeder::{
    data::{EventRepository, MissionRepository, ParticipationRepository, RewardRepository},
    seeder::{SeedOptions, Seeder},
};

/// Expect a run against an empty store to seed the full fixture set
#[tokio::test]
async fn seeds_empty_store() -> Result<(), TestError> {
    let test = test_setup_with_event_tables!()?;

    let summary = Seeder::new(&test.db)
        .run(&SeedOptions::default())
        .await
        .expect("seeding an empty store should succeed");

    assert!(summary.verified);
    assert_eq!(summary.mission_count(), 3);
    assert_eq!(summary.reward_count(), 5);
    assert_eq!(summary.organization_id, "ORG001");

    Ok(())
}

/// Expect two wipe runs in a row to leave exactly one fixture set
#[tokio::test]
async fn reseeding_with_wipe_is_idempotent() -> Result<(), TestError> {
    let test = test_setup_with_event_tables!()?;
    let seeder = Seeder::new(&test.db);
    let options = SeedOptions { wipe: true };

    seeder.run(&options).await.expect("first run should succeed");
    let second = seeder.run(&options).await.expect("second run should succeed");

    assert!(second.verified);
    assert_eq!(EventRepository::new(&test.db).count().await?, 1);
    assert_eq!(MissionRepository::new(&test.db).count().await?, 3);
    assert_eq!(RewardRepository::new(&test.db).count().await?, 5);

    Ok(())
}

/// Expect every seeded child row to reference the event created in the same run
#[tokio::test]
async fn children_reference_seeded_event() -> Result<(), TestError> {
    let test = test_setup_with_event_tables!()?;

    let summary = Seeder::new(&test.db)
        .run(&SeedOptions::default())
        .await
        .expect("seeding should succeed");

    let event = EventRepository::new(&test.db)
        .get_by_id(summary.event_id)
        .await?
        .expect("seeded event should resolve by id");

    let missions = MissionRepository::new(&test.db).get_by_event_id(event.id).await?;
    let rewards = RewardRepository::new(&test.db).get_by_event_id(event.id).await?;

    assert_eq!(missions.len(), 3);
    assert_eq!(rewards.len(), 5);
    assert!(missions.iter().all(|m| m.event_id == event.id));
    assert!(rewards.iter().all(|r| r.event_id == event.id));

    Ok(())
}

/// Expect the stored reward probabilities to cover the whole draw space
#[tokio::test]
async fn stored_probabilities_sum_to_one() -> Result<(), TestError> {
    let test = test_setup_with_event_tables!()?;

    let summary = Seeder::new(&test.db)
        .run(&SeedOptions::default())
        .await
        .expect("seeding should succeed");

    let rewards = RewardRepository::new(&test.db)
        .get_by_event_id(summary.event_id)
        .await?;

    let total: f64 = rewards.iter().map(|r| r.probability).sum();
    assert!((total - 1.0).abs() < 1e-9);

    Ok(())
}

/// Expect every seeded reward to start with a full inventory
#[tokio::test]
async fn rewards_start_with_full_inventory() -> Result<(), TestError> {
    let test = test_setup_with_event_tables!()?;

    let summary = Seeder::new(&test.db)
        .run(&SeedOptions::default())
        .await
        .expect("seeding should succeed");

    let rewards = RewardRepository::new(&test.db)
        .get_by_event_id(summary.event_id)
        .await?;

    for reward in rewards {
        assert_eq!(reward.remaining_quantity, reward.total_quantity);
    }

    Ok(())
}

/// Expect missions ordered 1..=3 and rewards graded 1..=5 in the listings
#[tokio::test]
async fn listings_come_back_ordered() -> Result<(), TestError> {
    let test = test_setup_with_event_tables!()?;

    let summary = Seeder::new(&test.db)
        .run(&SeedOptions::default())
        .await
        .expect("seeding should succeed");

    let orders: Vec<i32> = summary.missions.iter().map(|m| m.display_order).collect();
    let grades: Vec<i32> = summary.rewards.iter().map(|r| r.reward_grade).collect();

    assert_eq!(orders, vec![1, 2, 3]);
    assert_eq!(grades, vec![1, 2, 3, 4, 5]);

    Ok(())
}

/// Expect the exact fixture literals in the store after a run
#[tokio::test]
async fn seeds_fixture_literals() -> Result<(), TestError> {
    use entity::event_mission::MissionType;

    let test = test_setup_with_event_tables!()?;

    let summary = Seeder::new(&test.db)
        .run(&SeedOptions::default())
        .await
        .expect("seeding should succeed");

    let event = EventRepository::new(&test.db)
        .get_by_id(summary.event_id)
        .await?
        .expect("seeded event should exist");

    assert_eq!(event.name, "CoShow 2024 부스 이벤트");
    assert!(event.is_active);
    assert_eq!(event.organization_id, "ORG001");

    let missions = MissionRepository::new(&test.db).get_by_event_id(event.id).await?;
    let expected_missions = [
        ("특정 버스 탑승하기", MissionType::Boarding, Some("5001"), 1),
        (
            "특정 정류장 방문하기",
            MissionType::VisitStation,
            Some("STATION_COSHOW"),
            2,
        ),
        ("자동 승하차 감지 완료", MissionType::AutoDetectBoarding, None, 3),
    ];
    for (mission, (title, mission_type, target, order)) in missions.iter().zip(expected_missions) {
        assert_eq!(mission.title, title);
        assert_eq!(mission.mission_type, mission_type);
        assert_eq!(mission.target_value.as_deref(), target);
        assert_eq!(mission.display_order, order);
        assert!(mission.is_required);
    }

    let rewards = RewardRepository::new(&test.db).get_by_event_id(event.id).await?;
    let expected_rewards = [
        ("AirPods Pro 2세대", 1, 5, 0.05),
        ("스타벅스 기프티콘 3만원", 2, 10, 0.10),
        ("카카오프렌즈 인형", 3, 15, 0.15),
        ("스타벅스 기프티콘 1만원", 4, 20, 0.20),
        ("버스 버디버디 굿즈", 5, 50, 0.50),
    ];
    for (reward, (name, grade, quantity, probability)) in rewards.iter().zip(expected_rewards) {
        assert_eq!(reward.reward_name, name);
        assert_eq!(reward.reward_grade, grade);
        assert_eq!(reward.total_quantity, quantity);
        assert_eq!(reward.probability, probability);
    }

    Ok(())
}

/// Expect an insert failure to abort the run but keep already-committed steps
#[tokio::test]
async fn mission_insert_failure_leaves_orphan_event() -> Result<(), TestError> {
    use sea_orm::ConnectionTrait;

    let test = test_setup_with_event_tables!()?;

    // Rebuild the mission table so that the fixture's display orders violate
    // a check constraint: step 3 (missions) then fails after step 2 (event)
    // committed. There is no rollback by design.
    test.db.execute_unprepared("DROP TABLE event_missions").await?;
    test.db
        .execute_unprepared(
            "CREATE TABLE event_missions ( \
             id integer NOT NULL PRIMARY KEY AUTOINCREMENT, \
             event_id integer NOT NULL, \
             title varchar NOT NULL, \
             description varchar NOT NULL, \
             mission_type varchar(32) NOT NULL, \
             target_value varchar NULL, \
             is_required boolean NOT NULL, \
             display_order integer NOT NULL CHECK (display_order > 10), \
             created_at timestamp NOT NULL )",
        )
        .await?;

    let result = Seeder::new(&test.db).run(&SeedOptions::default()).await;

    assert!(result.is_err());
    assert_eq!(EventRepository::new(&test.db).count().await?, 1);
    assert_eq!(MissionRepository::new(&test.db).count().await?, 0);
    assert_eq!(RewardRepository::new(&test.db).count().await?, 0);

    Ok(())
}

/// Expect a failed read-back to report an unverified summary instead of an error
#[tokio::test]
async fn read_back_failure_reports_unverified_summary() -> Result<(), TestError> {
    use sea_orm::ConnectionTrait;

    let test = test_setup_with_event_tables!()?;

    // Rewrite each mission row right after its insert to a type the entity
    // cannot decode: the writes commit, but the verification listing fails.
    test.db
        .execute_unprepared(
            "CREATE TRIGGER scramble_mission_type AFTER INSERT ON event_missions \
             BEGIN \
             UPDATE event_missions SET mission_type = 'MYSTERY' WHERE id = NEW.id; \
             END",
        )
        .await?;

    let summary = Seeder::new(&test.db)
        .run(&SeedOptions::default())
        .await
        .expect("a read-back failure should not fail the run");

    assert!(!summary.verified);
    assert_eq!(summary.mission_count(), 3);
    assert_eq!(summary.reward_count(), 5);

    // The seeded rows are all committed despite the unverified listing.
    assert_eq!(EventRepository::new(&test.db).count().await?, 1);
    assert_eq!(MissionRepository::new(&test.db).count().await?, 3);
    assert_eq!(RewardRepository::new(&test.db).count().await?, 5);

    Ok(())
}

/// Expect the participation table to stay empty; it belongs to the awarding system
#[tokio::test]
async fn never_populates_participations() -> Result<(), TestError> {
    let test = test_setup_with_event_tables!()?;

    Seeder::new(&test.db)
        .run(&SeedOptions::default())
        .await
        .expect("seeding should succeed");

    assert_eq!(ParticipationRepository::new(&test.db).count().await?, 0);

    Ok(())
}
