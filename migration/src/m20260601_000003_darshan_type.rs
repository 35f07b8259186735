use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260601_000002_jyotirlinga::Jyotirlinga;

static IDX_DARSHAN_TYPE_JYOTIRLINGA_ID: &str = "idx-darshan_type-jyotirlinga_id";
static FK_DARSHAN_TYPE_JYOTIRLINGA_ID: &str = "fk-darshan_type-jyotirlinga_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(DarshanType::Table)
                    .if_not_exists()
                    .col(pk_auto(DarshanType::Id))
                    .col(integer(DarshanType::JyotirlingaId))
                    .col(string_uniq(DarshanType::Slug))
                    .col(json_binary(DarshanType::Name))
                    .col(json_binary(DarshanType::Description))
                    .col(big_integer(DarshanType::PricePaise))
                    .col(integer(DarshanType::DurationMinutes))
                    .col(integer(DarshanType::MaxPersonsPerBooking))
                    .col(boolean(DarshanType::IsActive).default(true))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_DARSHAN_TYPE_JYOTIRLINGA_ID)
                    .table(DarshanType::Table)
                    .col(DarshanType::JyotirlingaId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_DARSHAN_TYPE_JYOTIRLINGA_ID)
                    .from_tbl(DarshanType::Table)
                    .from_col(DarshanType::JyotirlingaId)
                    .to_tbl(Jyotirlinga::Table)
                    .to_col(Jyotirlinga::Id)
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
                    .name(FK_DARSHAN_TYPE_JYOTIRLINGA_ID)
                    .table(DarshanType::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_DARSHAN_TYPE_JYOTIRLINGA_ID)
                    .table(DarshanType::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(DarshanType::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum DarshanType {
    Table,
    Id,
    JyotirlingaId,
    Slug,
    Name,
    Description,
    PricePaise,
    DurationMinutes,
    MaxPersonsPerBooking,
    IsActive,
}
