use axum::{extract::State, Json};
use models::{course::Course, service::Service};

use crate::{errors::JsonApiError, state::AppState};

#[utoipa::path(
    get, path = "/api/services", tag = "catalog",
    responses(
        (status = 200, description = "Stored services, or the built-in list when none are stored", body = [crate::openapi::ServiceDoc]),
        (status = 500, description = "Store unavailable")
    )
)]
pub async fn list_services(State(state): State<AppState>) -> Result<Json<Vec<Service>>, JsonApiError> {
    Ok(Json(state.catalog.list_services().await?))
}

#[utoipa::path(get, path = "/api/courses", tag = "catalog", responses((status = 200, description = "Course catalog", body = [crate::openapi::CourseDoc])))]
pub async fn list_courses(State(state): State<AppState>) -> Json<&'static [Course]> {
    Json(state.catalog.list_courses())
}
