//! Factory functions for rows the seeder does not own.
//!
//! Used to stage pre-existing store contents in guard and destructive-reset
//! tests: an event from another organization, and a participation row of the
//! kind the external awarding system writes.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, JsonValue};

/// Inserts an event unrelated to the seeder's fixture.
pub async fn insert_unrelated_event(
    db: &DatabaseConnection,
) -> Result<entity::event::Model, DbErr> {
    let now = Utc::now().naive_utc();

    entity::event::ActiveModel {
        name: ActiveValue::Set("Legacy autumn campaign".to_string()),
        description: ActiveValue::Set("Pre-existing event owned by another team".to_string()),
        start_date: ActiveValue::Set(now),
        end_date: ActiveValue::Set(now + chrono::Duration::days(30)),
        is_active: ActiveValue::Set(false),
        organization_id: ActiveValue::Set("ORG999".to_string()),
        created_at: ActiveValue::Set(now),
        updated_at: ActiveValue::Set(now),
        ..Default::default()
    }
    .insert(db)
    .await
}

/// Inserts a participation row for `event_id`.
pub async fn insert_participation(
    db: &DatabaseConnection,
    event_id: i32,
    user_id: &str,
) -> Result<entity::event_participation::Model, DbErr> {
    let now = Utc::now().naive_utc();

    entity::event_participation::ActiveModel {
        event_id: ActiveValue::Set(event_id),
        user_id: ActiveValue::Set(user_id.to_string()),
        completed_missions: ActiveValue::Set(JsonValue::Array(Vec::new())),
        is_eligible_for_draw: ActiveValue::Set(false),
        has_drawn: ActiveValue::Set(false),
        drawn_reward_id: ActiveValue::Set(None),
        draw_timestamp: ActiveValue::Set(None),
        created_at: ActiveValue::Set(now),
        updated_at: ActiveValue::Set(now),
        ..Default::default()
    }
    .insert(db)
    .await
}
