//! The seeding routine: reset (opt-in), insert the fixture set, read back,
//! report.
//!
//! One run is a strict sequence with no atomicity across steps: if the
//! mission or reward insert fails, the already-inserted event stays behind
//! with no compensating rollback. Acceptable for a fixture tool aimed at
//! empty or disposable stores.

pub mod fixture;
mod summary;

pub use summary::{MissionLine, RewardLine, SeedSummary};

use std::fmt;

use sea_orm::{ConnectionTrait, DbErr};
use tracing::{info, warn};

use crate::{
    data::{EventRepository, MissionRepository, ParticipationRepository, RewardRepository},
    error::Error,
};

/// Which step the seeder was executing when a write failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedStep {
    Reset,
    Event,
    Missions,
    Rewards,
}

impl fmt::Display for SeedStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let step = match self {
            SeedStep::Reset => "reset",
            SeedStep::Event => "insert event",
            SeedStep::Missions => "insert missions",
            SeedStep::Rewards => "insert rewards",
        };
        write!(f, "{step}")
    }
}

/// Options for one seeding run.
#[derive(Debug, Clone, Copy, Default)]
pub struct SeedOptions {
    /// Delete every row of the four event tables before seeding.
    ///
    /// The wipe has no scoping filter: it also removes event data this
    /// seeder did not create, so it must be requested explicitly. Without
    /// it the seeder refuses to touch a non-empty store.
    pub wipe: bool,
}

pub struct Seeder<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> Seeder<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Runs the full seeding sequence and returns the operator summary.
    ///
    /// A read-back failure after the writes committed is reported in the
    /// summary rather than returned as an error; every other failure aborts
    /// the remaining steps.
    pub async fn run(&self, options: &SeedOptions) -> Result<SeedSummary, Error> {
        if options.wipe {
            self.reset().await?;
        } else {
            self.ensure_empty().await?;
        }

        let events = EventRepository::new(self.db);
        let event = events
            .create(&fixture::event())
            .await
            .map_err(|source| Error::Insert { step: SeedStep::Event, source })?;
        info!(event_id = event.id, "inserted event '{}'", event.name);

        let mission_fixtures = fixture::missions();
        MissionRepository::new(self.db)
            .create_many(event.id, &mission_fixtures)
            .await
            .map_err(|source| Error::Insert { step: SeedStep::Missions, source })?;
        info!("inserted {} missions", mission_fixtures.len());

        let reward_fixtures = fixture::rewards();
        RewardRepository::new(self.db)
            .create_many(event.id, &reward_fixtures)
            .await
            .map_err(|source| Error::Insert { step: SeedStep::Rewards, source })?;
        info!("inserted {} rewards", reward_fixtures.len());

        match self.verify(&event).await {
            Ok(summary) => Ok(summary),
            Err(err) => {
                warn!("read-back verification failed, seeded data is committed but unverified: {err}");

                Ok(SeedSummary {
                    event_id: event.id,
                    event_name: event.name,
                    organization_id: event.organization_id,
                    missions: mission_fixtures.iter().map(MissionLine::from).collect(),
                    rewards: reward_fixtures.iter().map(RewardLine::from).collect(),
                    verified: false,
                })
            }
        }
    }

    /// Deletes all rows of the four tables, children before owners.
    async fn reset(&self) -> Result<(), Error> {
        let step = |source| Error::Insert { step: SeedStep::Reset, source };

        let participations = ParticipationRepository::new(self.db)
            .clear()
            .await
            .map_err(step)?;
        let rewards = RewardRepository::new(self.db).clear().await.map_err(step)?;
        let missions = MissionRepository::new(self.db).clear().await.map_err(step)?;
        let events = EventRepository::new(self.db).clear().await.map_err(step)?;

        info!(
            "cleared existing event data ({} events, {} missions, {} rewards, {} participations)",
            events.rows_affected,
            missions.rows_affected,
            rewards.rows_affected,
            participations.rows_affected,
        );

        Ok(())
    }

    /// Refuses to seed a store that already holds event data.
    ///
    /// Runs before any write; a query failure here means the store was
    /// never usable, so it maps to a connection error.
    async fn ensure_empty(&self) -> Result<(), Error> {
        let rows = EventRepository::new(self.db)
            .count()
            .await
            .map_err(Error::Connection)?
            + MissionRepository::new(self.db)
                .count()
                .await
                .map_err(Error::Connection)?
            + RewardRepository::new(self.db)
                .count()
                .await
                .map_err(Error::Connection)?
            + ParticipationRepository::new(self.db)
                .count()
                .await
                .map_err(Error::Connection)?;

        if rows > 0 {
            return Err(Error::StoreNotEmpty { rows });
        }

        Ok(())
    }

    /// Re-reads the seeded rows and assembles the summary. Read-only.
    async fn verify(&self, event: &entity::event::Model) -> Result<SeedSummary, Error> {
        let stored = EventRepository::new(self.db)
            .get_by_id(event.id)
            .await
            .map_err(Error::ReadBack)?
            .ok_or_else(|| {
                Error::ReadBack(DbErr::RecordNotFound(format!(
                    "event {} missing after insert",
                    event.id
                )))
            })?;

        let missions = MissionRepository::new(self.db)
            .get_by_event_id(event.id)
            .await
            .map_err(Error::ReadBack)?;
        let rewards = RewardRepository::new(self.db)
            .get_by_event_id(event.id)
            .await
            .map_err(Error::ReadBack)?;

        Ok(SeedSummary {
            event_id: stored.id,
            event_name: stored.name,
            organization_id: stored.organization_id,
            missions: missions.into_iter().map(MissionLine::from).collect(),
            rewards: rewards.into_iter().map(RewardLine::from).collect(),
            verified: true,
        })
    }
}
