use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260601_000001_city::City;

static IDX_JYOTIRLINGA_CITY_ID: &str = "idx-jyotirlinga-city_id";
static FK_JYOTIRLINGA_CITY_ID: &str = "fk-jyotirlinga-city_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Jyotirlinga::Table)
                    .if_not_exists()
                    .col(pk_auto(Jyotirlinga::Id))
                    .col(string_uniq(Jyotirlinga::Slug))
                    .col(integer(Jyotirlinga::CityId))
                    .col(json_binary(Jyotirlinga::Name))
                    .col(json_binary(Jyotirlinga::Description))
                    .col(json_binary(Jyotirlinga::Significance))
                    .col(string(Jyotirlinga::Address))
                    .col(string_null(Jyotirlinga::ImageUrl))
                    .col(json_binary(Jyotirlinga::Gallery))
                    .col(boolean(Jyotirlinga::IsActive).default(true))
                    .col(timestamp(Jyotirlinga::CreatedAt))
                    .col(timestamp(Jyotirlinga::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_JYOTIRLINGA_CITY_ID)
                    .table(Jyotirlinga::Table)
                    .col(Jyotirlinga::CityId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_JYOTIRLINGA_CITY_ID)
                    .from_tbl(Jyotirlinga::Table)
                    .from_col(Jyotirlinga::CityId)
                    .to_tbl(City::Table)
                    .to_col(City::Id)
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
                    .name(FK_JYOTIRLINGA_CITY_ID)
                    .table(Jyotirlinga::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_JYOTIRLINGA_CITY_ID)
                    .table(Jyotirlinga::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Jyotirlinga::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Jyotirlinga {
    Table,
    Id,
    Slug,
    CityId,
    Name,
    Description,
    Significance,
    Address,
    ImageUrl,
    Gallery,
    IsActive,
    CreatedAt,
    UpdatedAt,
}
