use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    #[sea_orm(string_value = "confirmed")]
    Confirmed,
    #[sea_orm(string_value = "cancelled")]
    Cancelled,
    #[sea_orm(string_value = "completed")]
    Completed,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    #[sea_orm(string_value = "pending")]
    Pending,
    #[sea_orm(string_value = "completed")]
    Completed,
    #[sea_orm(string_value = "failed")]
    Failed,
    #[sea_orm(string_value = "refunded")]
    Refunded,
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "booking")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub receipt_number: String,
    pub user_id: i32,
    pub jyotirlinga_id: i32,
    pub darshan_type_id: i32,
    pub time_slot_id: i32,
    pub visit_date: Date,
    pub number_of_persons: i32,
    pub devotee_name: String,
    pub devotee_phone: String,
    pub total_amount_paise: i64,
    pub status: BookingStatus,
    pub payment_status: PaymentStatus,
    pub payment_reference: Option<String>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
    pub cancelled_at: Option<DateTime>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::app_user::Entity",
        from = "Column::UserId",
        to = "super::app_user::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    AppUser,
    #[sea_orm(
        belongs_to = "super::jyotirlinga::Entity",
        from = "Column::JyotirlingaId",
        to = "super::jyotirlinga::Column::Id",
        on_update = "NoAction",
        on_delete = "Restrict"
    )]
    Jyotirlinga,
    #[sea_orm(
        belongs_to = "super::darshan_type::Entity",
        from = "Column::DarshanTypeId",
        to = "super::darshan_type::Column::Id",
        on_update = "NoAction",
        on_delete = "Restrict"
    )]
    DarshanType,
    #[sea_orm(
        belongs_to = "super::time_slot::Entity",
        from = "Column::TimeSlotId",
        to = "super::time_slot::Column::Id",
        on_update = "NoAction",
        on_delete = "Restrict"
    )]
    TimeSlot,
}

impl Related<super::app_user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AppUser.def()
    }
}

impl Related<super::jyotirlinga::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Jyotirlinga.def()
    }
}

impl Related<super::darshan_type::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::DarshanType.def()
    }
}

impl Related<super::time_slot::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TimeSlot.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
