use sea_orm::entity::prelude::*;

use crate::localized::LocalizedText;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "city")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub slug: String,
    pub name: LocalizedText,
    pub state: LocalizedText,
    pub description: LocalizedText,
    pub image_url: Option<String>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::jyotirlinga::Entity")]
    Jyotirlinga,
}

impl Related<super::jyotirlinga::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Jyotirlinga.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
