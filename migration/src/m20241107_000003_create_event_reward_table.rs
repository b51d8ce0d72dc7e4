use sea_orm_migration::{prelude::*, schema::*};

use crate::m20241107_000001_create_event_table::Event;

static IDX_EVENT_REWARD_EVENT_ID: &str = "idx_event_reward_event_id";
static FK_EVENT_REWARD_EVENT: &str = "fk_event_reward_event";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(EventReward::Table)
                    .if_not_exists()
                    .col(pk_auto(EventReward::Id))
                    .col(integer(EventReward::EventId))
                    .col(string(EventReward::RewardName))
                    .col(integer(EventReward::RewardGrade))
                    .col(double(EventReward::Probability))
                    .col(integer(EventReward::TotalQuantity))
                    .col(integer(EventReward::RemainingQuantity))
                    .col(string(EventReward::ImageUrl))
                    .col(text(EventReward::Description))
                    .col(timestamp(EventReward::CreatedAt))
                    .col(timestamp(EventReward::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_EVENT_REWARD_EVENT)
                            .from(EventReward::Table, EventReward::EventId)
                            .to(Event::Table, Event::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_EVENT_REWARD_EVENT_ID)
                    .table(EventReward::Table)
                    .col(EventReward::EventId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_EVENT_REWARD_EVENT_ID)
                    .table(EventReward::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(EventReward::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum EventReward {
    #[sea_orm(iden = "event_rewards")]
    Table,
    Id,
    EventId,
    RewardName,
    RewardGrade,
    Probability,
    TotalQuantity,
    RemainingQuantity,
    ImageUrl,
    Description,
    CreatedAt,
    UpdatedAt,
}
