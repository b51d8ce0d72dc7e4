use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Event::Table)
                    .if_not_exists()
                    .col(pk_auto(Event::Id))
                    .col(string(Event::Name))
                    .col(text(Event::Description))
                    .col(timestamp(Event::StartDate))
                    .col(timestamp(Event::EndDate))
                    .col(boolean(Event::IsActive))
                    .col(string(Event::OrganizationId))
                    .col(timestamp(Event::CreatedAt))
                    .col(timestamp(Event::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Event::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Event {
    #[sea_orm(iden = "events")]
    Table,
    Id,
    Name,
    Description,
    StartDate,
    EndDate,
    IsActive,
    OrganizationId,
    CreatedAt,
    UpdatedAt,
}
