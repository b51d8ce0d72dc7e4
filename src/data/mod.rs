//! Data access layer repositories.
//!
//! One repository per event store table. Child rows point at their owning
//! event through a plain `event_id` column; resolving that reference is
//! always an explicit lookup through the owning table's repository, never
//! an embedded copy of the event.

pub mod event;
pub mod mission;
pub mod participation;
pub mod reward;

pub use event::EventRepository;
pub use mission::MissionRepository;
pub use participation::ParticipationRepository;
pub use reward::RewardRepository;
