use sea_orm::entity::prelude::*;

use crate::localized::{LocalizedText, MediaGallery};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "jyotirlinga")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub slug: String,
    pub city_id: i32,
    pub name: LocalizedText,
    pub description: LocalizedText,
    pub significance: LocalizedText,
    pub address: String,
    pub image_url: Option<String>,
    pub gallery: MediaGallery,
    pub is_active: bool,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::city::Entity",
        from = "Column::CityId",
        to = "super::city::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    City,
    #[sea_orm(has_many = "super::darshan_type::Entity")]
    DarshanType,
    #[sea_orm(has_many = "super::booking::Entity")]
    Booking,
}

impl Related<super::city::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::City.def()
    }
}

impl Related<super::darshan_type::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::DarshanType.def()
    }
}

impl Related<super::booking::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Booking.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
