use sea_orm::entity::prelude::*;

/// A time-bounded promotional campaign, e.g. a convention booth event.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "events")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub description: String,
    /// UTC instant at which the event opens. May be in the future.
    pub start_date: DateTime,
    /// UTC instant at which the event closes. Always after `start_date`.
    pub end_date: DateTime,
    pub is_active: bool,
    /// Identifier of the owning organization. The organization itself is
    /// managed by the external event system, not by this store.
    pub organization_id: String,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::event_mission::Entity")]
    EventMission,
    #[sea_orm(has_many = "super::event_reward::Entity")]
    EventReward,
    #[sea_orm(has_many = "super::event_participation::Entity")]
    EventParticipation,
}

impl Related<super::event_mission::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::EventMission.def()
    }
}

impl Related<super::event_reward::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::EventReward.def()
    }
}

impl Related<super::event_participation::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::EventParticipation.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
