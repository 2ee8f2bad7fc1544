use sea_orm_migration::{prelude::*, schema::*};

static IDX_LIKES_STUDENT_PLACE: &str = "idx_likes_student_place";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Likes::Table)
                    .if_not_exists()
                    .col(pk_auto(Likes::Id))
                    .col(string(Likes::Student))
                    .col(string(Likes::Place))
                    .to_owned(),
            )
            .await?;

        // One like per student per place, enforced by the database so that
        // the insert itself is the "already liked" check.
        manager
            .create_index(
                Index::create()
                    .name(IDX_LIKES_STUDENT_PLACE)
                    .table(Likes::Table)
                    .col(Likes::Student)
                    .col(Likes::Place)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_LIKES_STUDENT_PLACE)
                    .table(Likes::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Likes::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Likes {
    Table,
    Id,
    Student,
    Place,
}
