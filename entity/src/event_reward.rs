use sea_orm::entity::prelude::*;

/// A prize tier with a win probability and a capped inventory.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "event_rewards")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub event_id: i32,
    pub reward_name: String,
    /// Rank within the event, 1 = best. Unique per event.
    pub reward_grade: i32,
    /// Win probability in (0.0, 1.0]. The probabilities of all rewards of
    /// one event are expected to sum to 1.0.
    pub probability: f64,
    pub total_quantity: i32,
    /// Inventory left to award. Initialized to `total_quantity`; decremented
    /// by the external awarding system, never by the seeder.
    pub remaining_quantity: i32,
    pub image_url: String,
    pub description: String,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

impl Model {
    /// Whether there is inventory left to award.
    pub fn is_available(&self) -> bool {
        self.remaining_quantity > 0
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::event::Entity",
        from = "Column::EventId",
        to = "super::event::Column::Id"
    )]
    Event,
}

impl Related<super::event::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Event.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
