use std::sync::Arc;

use models::{course::{self, Course}, service::{self, Service}, FETCH_LIMIT};
use tracing::{debug, instrument};

use crate::catalog::repository::ServiceRepository;
use crate::errors::ServiceError;

pub struct CatalogService<R: ServiceRepository> {
    repo: Arc<R>,
}

impl<R: ServiceRepository> CatalogService<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }

    /// Stored services, or the built-in list while none are stored.
    #[instrument(skip(self))]
    pub async fn list_services(&self) -> Result<Vec<Service>, ServiceError> {
        let stored = self.repo.list(FETCH_LIMIT).await?;
        if stored.is_empty() {
            debug!("services table empty, serving fallback list");
            return Ok(service::fallback());
        }
        Ok(stored)
    }

    pub fn list_courses(&self) -> &'static [Course] {
        course::catalog()
    }
}
