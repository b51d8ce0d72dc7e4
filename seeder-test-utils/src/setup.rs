use sea_orm::{sea_query::TableCreateStatement, ConnectionTrait, Database, DatabaseConnection};

use crate::error::TestError;

pub struct TestSetup {
    pub db: DatabaseConnection,
}

impl TestSetup {
    /// Connects to a fresh in-memory SQLite database with no tables created.
    pub async fn new() -> Result<Self, TestError> {
        let db = Database::connect("sqlite::memory:").await?;

        Ok(TestSetup { db })
    }

    /// Creates the given tables on the test database.
    pub async fn with_tables(&self, stmts: Vec<TableCreateStatement>) -> Result<(), TestError> {
        for stmt in stmts {
            self.db.execute(&stmt).await?;
        }

        Ok(())
    }
}

#[macro_export]
macro_rules! test_setup_with_tables {
    // Pattern 1: No entities provided
    () => {{
        TestSetup::new().await
    }};

    // Pattern 2: Entities provided
    ($($entity:expr),+ $(,)?) => {{
        async {
            let setup = TestSetup::new().await?;

            let schema = sea_orm::Schema::new(sea_orm::DbBackend::Sqlite);
            let stmts = vec![
                $(schema.create_table_from_entity($entity),)+
            ];
            setup.with_tables(stmts).await?;

            Ok::<_, $crate::error::TestError>(setup)
        }.await
    }};
}

/// Sets up a test database holding all four event store tables.
#[macro_export]
macro_rules! test_setup_with_event_tables {
    () => {{
        async {
            let setup = TestSetup::new().await?;

            let schema = sea_orm::Schema::new(sea_orm::DbBackend::Sqlite);
            let stmts = vec![
                schema.create_table_from_entity(entity::prelude::Event),
                schema.create_table_from_entity(entity::prelude::EventMission),
                schema.create_table_from_entity(entity::prelude::EventReward),
                schema.create_table_from_entity(entity::prelude::EventParticipation),
            ];
            setup.with_tables(stmts).await?;

            Ok::<_, $crate::error::TestError>(setup)
        }
        .await
    }};
}
