use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20260601_000002_jyotirlinga::Jyotirlinga, m20260601_000003_darshan_type::DarshanType,
    m20260601_000004_time_slot::TimeSlot, m20260601_000005_app_user::AppUser,
};

static IDX_BOOKING_USER_ID: &str = "idx-booking-user_id";
static IDX_BOOKING_SLOT_DATE: &str = "idx-booking-time_slot_id-visit_date";
static FK_BOOKING_USER_ID: &str = "fk-booking-user_id";
static FK_BOOKING_JYOTIRLINGA_ID: &str = "fk-booking-jyotirlinga_id";
static FK_BOOKING_DARSHAN_TYPE_ID: &str = "fk-booking-darshan_type_id";
static FK_BOOKING_TIME_SLOT_ID: &str = "fk-booking-time_slot_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Booking::Table)
                    .if_not_exists()
                    .col(pk_auto(Booking::Id))
                    .col(string_len_uniq(Booking::ReceiptNumber, 32))
                    .col(integer(Booking::UserId))
                    .col(integer(Booking::JyotirlingaId))
                    .col(integer(Booking::DarshanTypeId))
                    .col(integer(Booking::TimeSlotId))
                    .col(date(Booking::VisitDate))
                    .col(integer(Booking::NumberOfPersons))
                    .col(string_len(Booking::DevoteeName, 100))
                    .col(string_len(Booking::DevoteePhone, 16))
                    .col(big_integer(Booking::TotalAmountPaise))
                    .col(string_len(Booking::Status, 16))
                    .col(string_len(Booking::PaymentStatus, 16))
                    .col(string_null(Booking::PaymentReference))
                    .col(timestamp(Booking::CreatedAt))
                    .col(timestamp(Booking::UpdatedAt))
                    .col(timestamp_null(Booking::CancelledAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_BOOKING_USER_ID)
                    .table(Booking::Table)
                    .col(Booking::UserId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_BOOKING_SLOT_DATE)
                    .table(Booking::Table)
                    .col(Booking::TimeSlotId)
                    .col(Booking::VisitDate)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_BOOKING_USER_ID)
                    .from_tbl(Booking::Table)
                    .from_col(Booking::UserId)
                    .to_tbl(AppUser::Table)
                    .to_col(AppUser::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_BOOKING_JYOTIRLINGA_ID)
                    .from_tbl(Booking::Table)
                    .from_col(Booking::JyotirlingaId)
                    .to_tbl(Jyotirlinga::Table)
                    .to_col(Jyotirlinga::Id)
                    .on_delete(ForeignKeyAction::Restrict)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_BOOKING_DARSHAN_TYPE_ID)
                    .from_tbl(Booking::Table)
                    .from_col(Booking::DarshanTypeId)
                    .to_tbl(DarshanType::Table)
                    .to_col(DarshanType::Id)
                    .on_delete(ForeignKeyAction::Restrict)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_BOOKING_TIME_SLOT_ID)
                    .from_tbl(Booking::Table)
                    .from_col(Booking::TimeSlotId)
                    .to_tbl(TimeSlot::Table)
                    .to_col(TimeSlot::Id)
                    .on_delete(ForeignKeyAction::Restrict)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for name in [
            FK_BOOKING_TIME_SLOT_ID,
            FK_BOOKING_DARSHAN_TYPE_ID,
            FK_BOOKING_JYOTIRLINGA_ID,
            FK_BOOKING_USER_ID,
        ] {
            manager
                .drop_foreign_key(ForeignKey::drop().name(name).table(Booking::Table).to_owned())
                .await?;
        }

        for name in [IDX_BOOKING_SLOT_DATE, IDX_BOOKING_USER_ID] {
            manager
                .drop_index(Index::drop().name(name).table(Booking::Table).to_owned())
                .await?;
        }

        manager
            .drop_table(Table::drop().table(Booking::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Booking {
    Table,
    Id,
    ReceiptNumber,
    UserId,
    JyotirlingaId,
    DarshanTypeId,
    TimeSlotId,
    VisitDate,
    NumberOfPersons,
    DevoteeName,
    DevoteePhone,
    TotalAmountPaise,
    Status,
    PaymentStatus,
    PaymentReference,
    CreatedAt,
    UpdatedAt,
    CancelledAt,
}
