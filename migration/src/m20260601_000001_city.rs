use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(City::Table)
                    .if_not_exists()
                    .col(pk_auto(City::Id))
                    .col(string_uniq(City::Slug))
                    .col(json_binary(City::Name))
                    .col(json_binary(City::State))
                    .col(json_binary(City::Description))
                    .col(string_null(City::ImageUrl))
                    .col(timestamp(City::CreatedAt))
                    .col(timestamp(City::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(City::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum City {
    Table,
    Id,
    Slug,
    Name,
    State,
    Description,
    ImageUrl,
    CreatedAt,
    UpdatedAt,
}
