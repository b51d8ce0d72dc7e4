use chrono::Utc;
use sea_orm::{
    ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder,
};

use crate::seeder::fixture::MissionFixture;

pub struct MissionRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> MissionRepository<'a, C> {
    /// Creates a new instance of [`MissionRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Bulk-inserts missions for `event_id`.
    ///
    /// Runs as one multi-row insert: on failure nothing from this batch is
    /// written and the store error surfaces unmodified.
    pub async fn create_many(
        &self,
        event_id: i32,
        fixtures: &[MissionFixture],
    ) -> Result<(), DbErr> {
        let now = Utc::now().naive_utc();

        let missions = fixtures.iter().map(|fixture| entity::event_mission::ActiveModel {
            event_id: ActiveValue::Set(event_id),
            title: ActiveValue::Set(fixture.title.to_string()),
            description: ActiveValue::Set(fixture.description.to_string()),
            mission_type: ActiveValue::Set(fixture.mission_type.clone()),
            target_value: ActiveValue::Set(fixture.target_value.map(str::to_string)),
            is_required: ActiveValue::Set(fixture.is_required),
            display_order: ActiveValue::Set(fixture.display_order),
            created_at: ActiveValue::Set(now),
            ..Default::default()
        });

        entity::prelude::EventMission::insert_many(missions)
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Lists an event's missions in presentation order.
    pub async fn get_by_event_id(
        &self,
        event_id: i32,
    ) -> Result<Vec<entity::event_mission::Model>, DbErr> {
        entity::prelude::EventMission::find()
            .filter(entity::event_mission::Column::EventId.eq(event_id))
            .order_by_asc(entity::event_mission::Column::DisplayOrder)
            .all(self.db)
            .await
    }

    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::EventMission::find().count(self.db).await
    }

    /// Deletes every mission in the store, regardless of owning event.
    pub async fn clear(&self) -> Result<DeleteResult, DbErr> {
        entity::prelude::EventMission::delete_many().exec(self.db).await
    }
}
