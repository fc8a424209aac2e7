//! OpenAPI document for the `/api` surface, served at `/api-docs/openapi.json`.
use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(ToSchema)]
pub struct MessageResponseDoc { pub message: String }

#[derive(ToSchema)]
pub struct ServiceDoc {
    pub id: String,
    pub name: String,
    pub description: String,
    pub icon: String,
    pub featured: bool,
}

#[derive(ToSchema)]
pub struct CourseDoc {
    pub id: String,
    pub name: String,
    pub duration: String,
    pub description: String,
}

#[derive(ToSchema)]
pub struct AchievementDoc {
    pub id: String,
    pub student_name: String,
    pub course_completed: String,
    pub photo_url: Option<String>,
    pub completion_date: String,
    pub testimonial: Option<String>,
    pub placed_at: Option<String>,
    pub created_at: String,
}

#[derive(ToSchema)]
pub struct AchievementCreateDoc {
    pub student_name: String,
    pub course_completed: String,
    pub photo_url: Option<String>,
    pub completion_date: String,
    pub testimonial: Option<String>,
    pub placed_at: Option<String>,
}

#[derive(ToSchema)]
pub struct EnrollmentDoc {
    pub id: String,
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub qualification: String,
    pub course: String,
    pub message: Option<String>,
    pub created_at: String,
    pub status: String,
}

#[derive(ToSchema)]
pub struct EnrollmentCreateDoc {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub qualification: String,
    pub course: String,
    pub message: Option<String>,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::root::root,
        crate::routes::catalog::list_services,
        crate::routes::catalog::list_courses,
        crate::routes::achievements::list,
        crate::routes::achievements::create,
        crate::routes::achievements::delete,
        crate::routes::enrollments::list,
        crate::routes::enrollments::create,
        crate::routes::enrollments::update_status,
    ),
    components(
        schemas(
            HealthResponse,
            MessageResponseDoc,
            ServiceDoc,
            CourseDoc,
            AchievementDoc,
            AchievementCreateDoc,
            EnrollmentDoc,
            EnrollmentCreateDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "root"),
        (name = "catalog"),
        (name = "achievements"),
        (name = "enrollments")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_lists_every_api_path() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&String> = doc.paths.paths.keys().collect();
        for expected in [
            "/api/",
            "/api/services",
            "/api/courses",
            "/api/achievements",
            "/api/achievements/{id}",
            "/api/enrollments",
            "/api/enrollments/{id}/status",
        ] {
            assert!(paths.iter().any(|p| p.as_str() == expected), "missing {expected}");
        }
    }
}
