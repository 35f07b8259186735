use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "time_slot")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub darshan_type_id: i32,
    pub start_time: Time,
    pub end_time: Time,
    /// Maximum number of persons admitted in this slot per day.
    pub capacity: i32,
    pub is_active: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::darshan_type::Entity",
        from = "Column::DarshanTypeId",
        to = "super::darshan_type::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    DarshanType,
    #[sea_orm(has_many = "super::booking::Entity")]
    Booking,
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
