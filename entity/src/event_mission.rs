use sea_orm::entity::prelude::*;

/// A task a participant must complete within an event.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "event_missions")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub event_id: i32,
    pub title: String,
    pub description: String,
    pub mission_type: MissionType,
    /// Completion condition parameter; semantics depend on `mission_type`
    /// (bus number for BOARDING, station id for VISIT_STATION). None when
    /// the type needs no target.
    pub target_value: Option<String>,
    pub is_required: bool,
    /// Presentation order within the event, starting at 1.
    pub display_order: i32,
    pub created_at: DateTime,
}

/// How a mission is completed.
#[derive(Clone, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(32))")]
pub enum MissionType {
    /// Board a specific bus.
    #[sea_orm(string_value = "BOARDING")]
    Boarding,
    /// Visit a specific station.
    #[sea_orm(string_value = "VISIT_STATION")]
    VisitStation,
    /// Complete a trip with automatic boarding/alighting detection.
    #[sea_orm(string_value = "AUTO_DETECT_BOARDING")]
    AutoDetectBoarding,
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
