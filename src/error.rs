//! Error types for the event seeder.
//!
//! The seeder distinguishes three failure classes: the store was never
//! reachable (nothing written), a write step failed (earlier steps are
//! already committed, there is no rollback), and the post-insert read-back
//! failed (all writes committed but unverified). All of them carry the
//! underlying [`sea_orm::DbErr`] verbatim; there are no retries.

use thiserror::Error;

use crate::seeder::SeedStep;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),
}

#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing connection string).
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// The store could not be reached. Fatal, raised before any write.
    #[error("Failed to connect to the event store: {0}")]
    Connection(#[source] sea_orm::DbErr),
    /// Schema migration failed while bringing the store up to date.
    #[error("Failed to migrate the event store schema: {0}")]
    Migration(#[source] sea_orm::DbErr),
    /// A write step failed. Remaining steps are skipped; steps that already
    /// committed stay committed.
    #[error("Seeding step '{step}' failed: {source}")]
    Insert {
        step: SeedStep,
        #[source]
        source: sea_orm::DbErr,
    },
    /// The post-insert verification query failed. Non-fatal: the seeder
    /// reports an unverified summary instead of aborting.
    #[error("Read-back verification failed: {0}")]
    ReadBack(#[source] sea_orm::DbErr),
    /// The store already holds event data and no wipe was requested.
    #[error(
        "Event store already holds {rows} row(s); \
         re-run with --wipe to clear it first (removes ALL event data, \
         including rows this seeder did not create)"
    )]
    StoreNotEmpty { rows: u64 },
}
