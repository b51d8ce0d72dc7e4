use chrono::Utc;
use sea_orm::{
    ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder,
};

use crate::seeder::fixture::RewardFixture;

pub struct RewardRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> RewardRepository<'a, C> {
    /// Creates a new instance of [`RewardRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Bulk-inserts rewards for `event_id`, with `remaining_quantity`
    /// starting at `total_quantity`. The awarding system owns all later
    /// decrements.
    pub async fn create_many(
        &self,
        event_id: i32,
        fixtures: &[RewardFixture],
    ) -> Result<(), DbErr> {
        let now = Utc::now().naive_utc();

        let rewards = fixtures.iter().map(|fixture| entity::event_reward::ActiveModel {
            event_id: ActiveValue::Set(event_id),
            reward_name: ActiveValue::Set(fixture.reward_name.to_string()),
            reward_grade: ActiveValue::Set(fixture.reward_grade),
            probability: ActiveValue::Set(fixture.probability),
            total_quantity: ActiveValue::Set(fixture.total_quantity),
            remaining_quantity: ActiveValue::Set(fixture.total_quantity),
            image_url: ActiveValue::Set(fixture.image_url.to_string()),
            description: ActiveValue::Set(fixture.description.to_string()),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        });

        entity::prelude::EventReward::insert_many(rewards)
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Lists an event's rewards ascending by grade (1 = best first).
    pub async fn get_by_event_id(
        &self,
        event_id: i32,
    ) -> Result<Vec<entity::event_reward::Model>, DbErr> {
        entity::prelude::EventReward::find()
            .filter(entity::event_reward::Column::EventId.eq(event_id))
            .order_by_asc(entity::event_reward::Column::RewardGrade)
            .all(self.db)
            .await
    }

    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::EventReward::find().count(self.db).await
    }

    /// Deletes every reward in the store, regardless of owning event.
    pub async fn clear(&self) -> Result<DeleteResult, DbErr> {
        entity::prelude::EventReward::delete_many().exec(self.db).await
    }
}
