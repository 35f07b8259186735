use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260601_000003_darshan_type::DarshanType;

static IDX_TIME_SLOT_DARSHAN_TYPE_ID: &str = "idx-time_slot-darshan_type_id";
static FK_TIME_SLOT_DARSHAN_TYPE_ID: &str = "fk-time_slot-darshan_type_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TimeSlot::Table)
                    .if_not_exists()
                    .col(pk_auto(TimeSlot::Id))
                    .col(integer(TimeSlot::DarshanTypeId))
                    .col(time(TimeSlot::StartTime))
                    .col(time(TimeSlot::EndTime))
                    .col(integer(TimeSlot::Capacity))
                    .col(boolean(TimeSlot::IsActive).default(true))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_TIME_SLOT_DARSHAN_TYPE_ID)
                    .table(TimeSlot::Table)
                    .col(TimeSlot::DarshanTypeId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_TIME_SLOT_DARSHAN_TYPE_ID)
                    .from_tbl(TimeSlot::Table)
                    .from_col(TimeSlot::DarshanTypeId)
                    .to_tbl(DarshanType::Table)
                    .to_col(DarshanType::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_TIME_SLOT_DARSHAN_TYPE_ID)
                    .table(TimeSlot::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_TIME_SLOT_DARSHAN_TYPE_ID)
                    .table(TimeSlot::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(TimeSlot::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum TimeSlot {
    Table,
    Id,
    DarshanTypeId,
    StartTime,
    EndTime,
    Capacity,
    IsActive,
}
