use sea_orm::entity::prelude::*;

use crate::localized::LocalizedText;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "darshan_type")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub jyotirlinga_id: i32,
    #[sea_orm(unique)]
    pub slug: String,
    pub name: LocalizedText,
    pub description: LocalizedText,
    /// Price per person in paise.
    pub price_paise: i64,
    pub duration_minutes: i32,
    pub max_persons_per_booking: i32,
    pub is_active: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::jyotirlinga::Entity",
        from = "Column::JyotirlingaId",
        to = "super::jyotirlinga::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    Jyotirlinga,
    #[sea_orm(has_many = "super::time_slot::Entity")]
    TimeSlot,
    #[sea_orm(has_many = "super::booking::Entity")]
    Booking,
}

impl Related<super::jyotirlinga::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Jyotirlinga.def()
    }
}

impl Related<super::time_slot::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TimeSlot.def()
    }
}

impl Related<super::booking::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Booking.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
