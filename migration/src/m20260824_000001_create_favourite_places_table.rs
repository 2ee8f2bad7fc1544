use sea_orm_migration::{prelude::*, schema::*};

static PK_FAVOURITE_PLACES: &str = "pk_favourite_places";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(FavouritePlaces::Table)
                    .if_not_exists()
                    .col(string(FavouritePlaces::Student))
                    .col(string(FavouritePlaces::Place))
                    .col(string(FavouritePlaces::Coordinates))
                    .col(string_null(FavouritePlaces::Reason))
                    .col(string_null(FavouritePlaces::Emoji))
                    .col(string_null(FavouritePlaces::Activity))
                    .col(string_null(FavouritePlaces::Memory))
                    .col(string_null(FavouritePlaces::Companions))
                    .col(string_null(FavouritePlaces::ImageUrl))
                    .primary_key(
                        Index::create()
                            .name(PK_FAVOURITE_PLACES)
                            .col(FavouritePlaces::Student)
                            .col(FavouritePlaces::Place),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(FavouritePlaces::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum FavouritePlaces {
    Table,
    Student,
    Place,
    Coordinates,
    Reason,
    Emoji,
    Activity,
    Memory,
    Companions,
    ImageUrl,
}
