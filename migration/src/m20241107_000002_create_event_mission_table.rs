use sea_orm_migration::{prelude::*, schema::*};

use crate::m20241107_000001_create_event_table::Event;

static IDX_EVENT_MISSION_EVENT_ID: &str = "idx_event_mission_event_id";
static FK_EVENT_MISSION_EVENT: &str = "fk_event_mission_event";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(EventMission::Table)
                    .if_not_exists()
                    .col(pk_auto(EventMission::Id))
                    .col(integer(EventMission::EventId))
                    .col(string(EventMission::Title))
                    .col(text(EventMission::Description))
                    .col(string_len(EventMission::MissionType, 32))
                    .col(string_null(EventMission::TargetValue))
                    .col(boolean(EventMission::IsRequired))
                    .col(integer(EventMission::DisplayOrder))
                    .col(timestamp(EventMission::CreatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_EVENT_MISSION_EVENT)
                            .from(EventMission::Table, EventMission::EventId)
                            .to(Event::Table, Event::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_EVENT_MISSION_EVENT_ID)
                    .table(EventMission::Table)
                    .col(EventMission::EventId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_EVENT_MISSION_EVENT_ID)
                    .table(EventMission::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(EventMission::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum EventMission {
    #[sea_orm(iden = "event_missions")]
    Table,
    Id,
    EventId,
    Title,
    Description,
    MissionType,
    TargetValue,
    IsRequired,
    DisplayOrder,
    CreatedAt,
}
