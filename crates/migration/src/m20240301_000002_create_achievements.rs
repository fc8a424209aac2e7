//! Create `achievements` table (student testimonials).
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Achievements::Table)
                    .if_not_exists()
                    .col(pk_auto(Achievements::Pk))
                    .col(string(Achievements::Id).unique_key())
                    .col(string(Achievements::StudentName))
                    .col(string(Achievements::CourseCompleted))
                    .col(string_null(Achievements::PhotoUrl))
                    .col(string(Achievements::CompletionDate))
                    .col(text_null(Achievements::Testimonial))
                    .col(string_null(Achievements::PlacedAt))
                    .col(string(Achievements::CreatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Achievements::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Achievements {
    Table,
    Pk,
    Id,
    StudentName,
    CourseCompleted,
    PhotoUrl,
    CompletionDate,
    Testimonial,
    PlacedAt,
    CreatedAt,
}
