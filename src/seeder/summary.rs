use std::fmt;

use entity::event_mission::MissionType;
use sea_orm::ActiveEnum;

use crate::seeder::fixture::{MissionFixture, RewardFixture};

/// Operator-facing report of a completed seeding run.
pub struct SeedSummary {
    pub event_id: i32,
    pub event_name: String,
    pub organization_id: String,
    pub missions: Vec<MissionLine>,
    pub rewards: Vec<RewardLine>,
    /// False when the post-insert read-back failed; the listings then
    /// reflect what was sent to the store, not what was read back from it.
    pub verified: bool,
}

pub struct MissionLine {
    pub display_order: i32,
    pub title: String,
    pub mission_type: MissionType,
}

pub struct RewardLine {
    pub reward_grade: i32,
    pub reward_name: String,
    pub probability: f64,
}

impl SeedSummary {
    pub fn mission_count(&self) -> usize {
        self.missions.len()
    }

    pub fn reward_count(&self) -> usize {
        self.rewards.len()
    }
}

impl From<entity::event_mission::Model> for MissionLine {
    fn from(mission: entity::event_mission::Model) -> Self {
        Self {
            display_order: mission.display_order,
            title: mission.title,
            mission_type: mission.mission_type,
        }
    }
}

impl From<&MissionFixture> for MissionLine {
    fn from(fixture: &MissionFixture) -> Self {
        Self {
            display_order: fixture.display_order,
            title: fixture.title.to_string(),
            mission_type: fixture.mission_type.clone(),
        }
    }
}

impl From<entity::event_reward::Model> for RewardLine {
    fn from(reward: entity::event_reward::Model) -> Self {
        Self {
            reward_grade: reward.reward_grade,
            reward_name: reward.reward_name,
            probability: reward.probability,
        }
    }
}

impl From<&RewardFixture> for RewardLine {
    fn from(fixture: &RewardFixture) -> Self {
        Self {
            reward_grade: fixture.reward_grade,
            reward_name: fixture.reward_name.to_string(),
            probability: fixture.probability,
        }
    }
}

impl fmt::Display for SeedSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "========================================")?;
        writeln!(f, "Seeded event data")?;
        writeln!(f, "========================================")?;
        writeln!(f, "Event id:        {}", self.event_id)?;
        writeln!(f, "Event name:      {}", self.event_name)?;
        writeln!(f, "Organization id: {}", self.organization_id)?;
        writeln!(f, "Missions:        {}", self.mission_count())?;
        writeln!(f, "Rewards:         {}", self.reward_count())?;
        writeln!(f)?;
        writeln!(f, "Missions:")?;
        for mission in &self.missions {
            writeln!(
                f,
                "  {}. {} ({})",
                mission.display_order,
                mission.title,
                mission.mission_type.to_value()
            )?;
        }
        writeln!(f)?;
        writeln!(f, "Rewards:")?;
        for reward in &self.rewards {
            writeln!(
                f,
                "  grade {}: {} ({}%)",
                reward.reward_grade,
                reward.reward_name,
                reward.probability * 100.0
            )?;
        }
        writeln!(f)?;
        writeln!(
            f,
            "Note: replace the organization id and mission target values with real ones."
        )?;
        if !self.verified {
            writeln!(
                f,
                "Warning: read-back verification failed; this listing is unverified."
            )?;
        }

        Ok(())
    }
}
