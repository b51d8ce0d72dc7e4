use sea_orm_migration::{prelude::*, schema::*};

use crate::m20241107_000001_create_event_table::Event;
use crate::m20241107_000003_create_event_reward_table::EventReward;

static IDX_EVENT_PARTICIPATION_EVENT_ID: &str = "idx_event_participation_event_id";
static FK_EVENT_PARTICIPATION_EVENT: &str = "fk_event_participation_event";
static FK_EVENT_PARTICIPATION_REWARD: &str = "fk_event_participation_reward";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(EventParticipation::Table)
                    .if_not_exists()
                    .col(pk_auto(EventParticipation::Id))
                    .col(integer(EventParticipation::EventId))
                    .col(string(EventParticipation::UserId))
                    .col(json(EventParticipation::CompletedMissions))
                    .col(boolean(EventParticipation::IsEligibleForDraw))
                    .col(boolean(EventParticipation::HasDrawn))
                    .col(integer_null(EventParticipation::DrawnRewardId))
                    .col(timestamp_null(EventParticipation::DrawTimestamp))
                    .col(timestamp(EventParticipation::CreatedAt))
                    .col(timestamp(EventParticipation::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_EVENT_PARTICIPATION_EVENT)
                            .from(EventParticipation::Table, EventParticipation::EventId)
                            .to(Event::Table, Event::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_EVENT_PARTICIPATION_REWARD)
                            .from(EventParticipation::Table, EventParticipation::DrawnRewardId)
                            .to(EventReward::Table, EventReward::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_EVENT_PARTICIPATION_EVENT_ID)
                    .table(EventParticipation::Table)
                    .col(EventParticipation::EventId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_EVENT_PARTICIPATION_EVENT_ID)
                    .table(EventParticipation::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(EventParticipation::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum EventParticipation {
    #[sea_orm(iden = "event_participations")]
    Table,
    Id,
    EventId,
    UserId,
    CompletedMissions,
    IsEligibleForDraw,
    HasDrawn,
    DrawnRewardId,
    DrawTimestamp,
    CreatedAt,
    UpdatedAt,
}
