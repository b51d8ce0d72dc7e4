pub use sea_orm_migration::prelude::*;

mod m20241107_000001_create_event_table;
mod m20241107_000002_create_event_mission_table;
mod m20241107_000003_create_event_reward_table;
mod m20241107_000004_create_event_participation_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20241107_000001_create_event_table::Migration),
            Box::new(m20241107_000002_create_event_mission_table::Migration),
            Box::new(m20241107_000003_create_event_reward_table::Migration),
            Box::new(m20241107_000004_create_event_participation_table::Migration),
        ]
    }
}
