use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    PaginatorTrait,
};

use crate::seeder::fixture::EventFixture;

pub struct EventRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> EventRepository<'a, C> {
    /// Creates a new instance of [`EventRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts one event, stamping created/updated with the current time.
    pub async fn create(&self, fixture: &EventFixture) -> Result<entity::event::Model, DbErr> {
        let now = Utc::now().naive_utc();

        let event = entity::event::ActiveModel {
            name: ActiveValue::Set(fixture.name.to_string()),
            description: ActiveValue::Set(fixture.description.to_string()),
            start_date: ActiveValue::Set(fixture.start_date),
            end_date: ActiveValue::Set(fixture.end_date),
            is_active: ActiveValue::Set(fixture.is_active),
            organization_id: ActiveValue::Set(fixture.organization_id.to_string()),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        event.insert(self.db).await
    }

    pub async fn get_by_id(&self, event_id: i32) -> Result<Option<entity::event::Model>, DbErr> {
        entity::prelude::Event::find_by_id(event_id).one(self.db).await
    }

    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::Event::find().count(self.db).await
    }

    /// Deletes every event in the store.
    ///
    /// Unscoped: removes rows this seeder did not create. Only reached
    /// through an explicitly requested wipe.
    pub async fn clear(&self) -> Result<DeleteResult, DbErr> {
        entity::prelude::Event::delete_many().exec(self.db).await
    }
}
