use async_trait::async_trait;
use models::achievement::Achievement;
use sea_orm::DatabaseConnection;

use crate::errors::ServiceError;

#[async_trait]
pub trait AchievementRepository: Send + Sync {
    async fn list(&self, limit: u64) -> Result<Vec<Achievement>, ServiceError>;
    async fn insert(&self, record: &Achievement) -> Result<(), ServiceError>;
    /// Returns how many records were removed.
    async fn delete(&self, id: &str) -> Result<u64, ServiceError>;
}

/// SeaORM-backed repository implementation.
pub struct SeaOrmAchievementRepository {
    pub db: DatabaseConnection,
}

#[async_trait]
impl AchievementRepository for SeaOrmAchievementRepository {
    async fn list(&self, limit: u64) -> Result<Vec<Achievement>, ServiceError> {
        Ok(models::achievement::list(&self.db, limit).await?)
    }

    async fn insert(&self, record: &Achievement) -> Result<(), ServiceError> {
        Ok(models::achievement::insert(&self.db, record).await?)
    }

    async fn delete(&self, id: &str) -> Result<u64, ServiceError> {
        Ok(models::achievement::delete_by_public_id(&self.db, id).await?)
    }
}
