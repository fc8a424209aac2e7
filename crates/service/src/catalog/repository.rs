use async_trait::async_trait;
use models::service::Service;
use sea_orm::DatabaseConnection;

use crate::errors::ServiceError;

#[async_trait]
pub trait ServiceRepository: Send + Sync {
    async fn list(&self, limit: u64) -> Result<Vec<Service>, ServiceError>;
}

/// SeaORM-backed repository implementation.
pub struct SeaOrmServiceRepository {
    pub db: DatabaseConnection,
}

#[async_trait]
impl ServiceRepository for SeaOrmServiceRepository {
    async fn list(&self, limit: u64) -> Result<Vec<Service>, ServiceError> {
        Ok(models::service::list(&self.db, limit).await?)
    }
}
