use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};

use crate::{config::Config, error::Error};

/// Connect to the event store and bring the schema up to date.
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, Error> {
    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await.map_err(Error::Connection)?;

    Migrator::up(&db, None).await.map_err(Error::Migration)?;

    Ok(db)
}
