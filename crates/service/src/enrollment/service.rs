use std::sync::Arc;

use models::{enrollment::{Enrollment, EnrollmentCreate}, FETCH_LIMIT};
use tracing::{info, instrument};

use crate::enrollment::repository::EnrollmentRepository;
use crate::errors::ServiceError;
use crate::factory::{format_timestamp, Clock, IdGenerator};

/// Application service for enrollment enquiries.
/// `status` is a free-form label; no transition rules are enforced.
pub struct EnrollmentService<R: EnrollmentRepository> {
    repo: Arc<R>,
    ids: Arc<dyn IdGenerator>,
    clock: Arc<dyn Clock>,
}

impl<R: EnrollmentRepository> EnrollmentService<R> {
    pub fn new(repo: Arc<R>, ids: Arc<dyn IdGenerator>, clock: Arc<dyn Clock>) -> Self {
        Self { repo, ids, clock }
    }

    pub async fn list(&self) -> Result<Vec<Enrollment>, ServiceError> {
        self.repo.list(FETCH_LIMIT).await
    }

    #[instrument(skip(self, input), fields(course = %input.course))]
    pub async fn create(&self, input: EnrollmentCreate) -> Result<Enrollment, ServiceError> {
        let record = Enrollment::from_input(input, self.ids.next_id(), format_timestamp(self.clock.now()));
        self.repo.insert(&record).await?;
        info!(id = %record.id, "enrollment_created");
        Ok(record)
    }

    #[instrument(skip(self))]
    pub async fn update_status(&self, id: &str, status: &str) -> Result<(), ServiceError> {
        if self.repo.set_status(id, status).await? == 0 {
            return Err(ServiceError::not_found("Enrollment"));
        }
        info!(%id, %status, "enrollment_status_updated");
        Ok(())
    }
}
