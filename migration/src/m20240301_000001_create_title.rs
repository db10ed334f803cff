use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Title::Table)
                    .if_not_exists()
                    .col(pk_auto(Title::Id))
                    .col(big_integer_null(Title::ShowId))
                    .col(string(Title::Title))
                    .col(string(Title::Type))
                    .col(string_null(Title::Director))
                    .col(string_null(Title::Cast))
                    .col(string_null(Title::Country))
                    .col(string_null(Title::DateAdded))
                    .col(integer_null(Title::ReleaseYear))
                    .col(string_null(Title::Rating))
                    .col(string_null(Title::Duration))
                    .col(string_null(Title::ListedIn))
                    .col(string_null(Title::Description))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_title_release_year")
                    .table(Title::Table)
                    .col(Title::ReleaseYear)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Title::Table).to_owned()).await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum Title {
    Table,
    Id,
    ShowId,
    Title,
    Type,
    Director,
    Cast,
    Country,
    DateAdded,
    ReleaseYear,
    Rating,
    Duration,
    ListedIn,
    Description,
}
