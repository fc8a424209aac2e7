//! Create `services` table.
//!
//! Reference data only. Rows are seeded outside the API.
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
                    .col(pk_auto(Services::Pk))
                    .col(string(Services::Id).unique_key())
                    .col(string(Services::Name))
                    .col(text(Services::Description))
                    .col(string(Services::Icon))
                    .col(boolean(Services::Featured).default(false))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Services::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Services { Table, Pk, Id, Name, Description, Icon, Featured }
