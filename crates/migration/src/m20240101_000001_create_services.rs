//! Create `services` table.
//!
//! Single-table catalog: `name` is required and bounded, the rest nullable.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Services::Table)
                    .if_not_exists()
                    .col(pk_auto(Services::Id))
                    .col(string_len(Services::Name, 100))
                    .col(text_null(Services::Description))
                    .col(double_null(Services::Price))
                    .col(integer_null(Services::Duration))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Services::Table).if_exists().to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Services { Table, Id, Name, Description, Price, Duration }
