use std::sync::Arc;

use models::{achievement::{Achievement, AchievementCreate}, FETCH_LIMIT};
use tracing::{info, instrument};

use crate::achievement::repository::AchievementRepository;
use crate::errors::ServiceError;
use crate::factory::{format_timestamp, Clock, IdGenerator};

/// Application service for graduate testimonials.
/// Owns id and `created_at` generation so callers never supply them.
pub struct AchievementService<R: AchievementRepository> {
    repo: Arc<R>,
    ids: Arc<dyn IdGenerator>,
    clock: Arc<dyn Clock>,
}

impl<R: AchievementRepository> AchievementService<R> {
    pub fn new(repo: Arc<R>, ids: Arc<dyn IdGenerator>, clock: Arc<dyn Clock>) -> Self {
        Self { repo, ids, clock }
    }

    pub async fn list(&self) -> Result<Vec<Achievement>, ServiceError> {
        self.repo.list(FETCH_LIMIT).await
    }

    #[instrument(skip(self, input), fields(student = %input.student_name))]
    pub async fn create(&self, input: AchievementCreate) -> Result<Achievement, ServiceError> {
        let record = Achievement::from_input(input, self.ids.next_id(), format_timestamp(self.clock.now()));
        self.repo.insert(&record).await?;
        info!(id = %record.id, "achievement_created");
        Ok(record)
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: &str) -> Result<(), ServiceError> {
        if self.repo.delete(id).await? == 0 {
            return Err(ServiceError::not_found("Achievement"));
        }
        info!(%id, "achievement_deleted");
        Ok(())
    }
}
