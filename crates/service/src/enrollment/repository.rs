use async_trait::async_trait;
use models::enrollment::Enrollment;
use sea_orm::DatabaseConnection;

use crate::errors::ServiceError;

#[async_trait]
pub trait EnrollmentRepository: Send + Sync {
    async fn list(&self, limit: u64) -> Result<Vec<Enrollment>, ServiceError>;
    async fn insert(&self, record: &Enrollment) -> Result<(), ServiceError>;
    /// Returns how many records matched `id`.
    async fn set_status(&self, id: &str, status: &str) -> Result<u64, ServiceError>;
}

/// SeaORM-backed repository implementation.
pub struct SeaOrmEnrollmentRepository {
    pub db: DatabaseConnection,
}

#[async_trait]
impl EnrollmentRepository for SeaOrmEnrollmentRepository {
    async fn list(&self, limit: u64) -> Result<Vec<Enrollment>, ServiceError> {
        Ok(models::enrollment::list(&self.db, limit).await?)
    }

    async fn insert(&self, record: &Enrollment) -> Result<(), ServiceError> {
        Ok(models::enrollment::insert(&self.db, record).await?)
    }

    async fn set_status(&self, id: &str, status: &str) -> Result<u64, ServiceError> {
        Ok(models::enrollment::set_status(&self.db, id, status).await?)
    }
}
