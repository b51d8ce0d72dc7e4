use sea_orm::{ConnectionTrait, DbErr, DeleteResult, EntityTrait, PaginatorTrait};

/// Repository for the participation table.
///
/// The external awarding system owns all writes here; the seeder only needs
/// to count rows for the empty-store guard and clear them during a wipe.
pub struct ParticipationRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ParticipationRepository<'a, C> {
    /// Creates a new instance of [`ParticipationRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::EventParticipation::find().count(self.db).await
    }

    pub async fn clear(&self) -> Result<DeleteResult, DbErr> {
        entity::prelude::EventParticipation::delete_many()
            .exec(self.db)
            .await
    }
}
