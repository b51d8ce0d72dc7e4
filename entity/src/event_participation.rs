use sea_orm::entity::prelude::*;

/// A user's progress and claim record against an event.
///
/// Owned by the external awarding system; the seeder only ever clears this
/// table and never inserts into it.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "event_participations")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub event_id: i32,
    /// External user identifier; the user entity lives in the event system.
    pub user_id: String,
    /// Ids of the missions this user has completed, as a JSON array.
    pub completed_missions: Json,
    pub is_eligible_for_draw: bool,
    pub has_drawn: bool,
    pub drawn_reward_id: Option<i32>,
    pub draw_timestamp: Option<DateTime>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::event::Entity",
        from = "Column::EventId",
        to = "super::event::Column::Id"
    )]
    Event,
    #[sea_orm(
        belongs_to = "super::event_reward::Entity",
        from = "Column::DrawnRewardId",
        to = "super::event_reward::Column::Id"
    )]
    EventReward,
}

impl Related<super::event::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Event.def()
    }
}

impl Related<super::event_reward::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::EventReward.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
