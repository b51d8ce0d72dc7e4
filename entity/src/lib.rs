pub mod event;
pub mod event_mission;
pub mod event_participation;
pub mod event_reward;
pub mod prelude;
