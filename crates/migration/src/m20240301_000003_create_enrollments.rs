//! Create `enrollments` table (lead-capture submissions).
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Enrollments::Table)
                    .if_not_exists()
                    .col(pk_auto(Enrollments::Pk))
                    .col(string(Enrollments::Id).unique_key())
                    .col(string(Enrollments::FullName))
                    .col(string(Enrollments::Email))
                    .col(string(Enrollments::Phone))
                    .col(text(Enrollments::Address))
                    .col(string(Enrollments::Qualification))
                    .col(string(Enrollments::Course))
                    .col(text_null(Enrollments::Message))
                    .col(string(Enrollments::CreatedAt))
                    .col(string(Enrollments::Status).default("pending"))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Enrollments::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Enrollments {
    Table,
    Pk,
    Id,
    FullName,
    Email,
    Phone,
    Address,
    Qualification,
    Course,
    Message,
    CreatedAt,
    Status,
}
