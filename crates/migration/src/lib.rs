//! Migrator creating one table per record collection.
//! Every table carries an auto-increment `pk` that fixes insertion order
//! and a unique public `id` string.
pub use sea_orm_migration::prelude::*;

mod m20240301_000001_create_services;
mod m20240301_000002_create_achievements;
mod m20240301_000003_create_enrollments;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240301_000001_create_services::Migration),
            Box::new(m20240301_000002_create_achievements::Migration),
            Box::new(m20240301_000003_create_enrollments::Migration),
        ]
    }
}
