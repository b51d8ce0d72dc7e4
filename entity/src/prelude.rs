pub use super::event::Entity as Event;
pub use super::event_mission::Entity as EventMission;
pub use super::event_participation::Entity as EventParticipation;
pub use super::event_reward::Entity as EventReward;
