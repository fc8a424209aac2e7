use std::sync::Arc;

use sea_orm::DatabaseConnection;
use service::{
    achievement::{repository::SeaOrmAchievementRepository, service::AchievementService},
    catalog::{repository::SeaOrmServiceRepository, service::CatalogService},
    enrollment::{repository::SeaOrmEnrollmentRepository, service::EnrollmentService},
    factory::{Clock, IdGenerator, SystemClock, UuidV4Ids},
};

/// Process-wide state handed to every handler. Cloning shares the pool.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<CatalogService<SeaOrmServiceRepository>>,
    pub achievements: Arc<AchievementService<SeaOrmAchievementRepository>>,
    pub enrollments: Arc<EnrollmentService<SeaOrmEnrollmentRepository>>,
}

impl AppState {
    /// Production wiring: UUID v4 ids and the system clock.
    pub fn new(db: DatabaseConnection) -> Self {
        Self::with_factories(db, Arc::new(UuidV4Ids), Arc::new(SystemClock))
    }

    pub fn with_factories(db: DatabaseConnection, ids: Arc<dyn IdGenerator>, clock: Arc<dyn Clock>) -> Self {
        let catalog = CatalogService::new(Arc::new(SeaOrmServiceRepository { db: db.clone() }));
        let achievements = AchievementService::new(
            Arc::new(SeaOrmAchievementRepository { db: db.clone() }),
            Arc::clone(&ids),
            Arc::clone(&clock),
        );
        let enrollments = EnrollmentService::new(
            Arc::new(SeaOrmEnrollmentRepository { db }),
            ids,
            clock,
        );
        Self {
            catalog: Arc::new(catalog),
            achievements: Arc::new(achievements),
            enrollments: Arc::new(enrollments),
        }
    }
}
