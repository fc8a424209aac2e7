use axum::{
    extract::{Path, State},
    Json,
};
use axum_extra::extract::WithRejection;
use common::types::MessageResponse;
use models::achievement::{Achievement, AchievementCreate};
use tracing::info;

use crate::{errors::JsonApiError, state::AppState};

#[utoipa::path(
    get, path = "/api/achievements", tag = "achievements",
    responses(
        (status = 200, description = "Up to 100 achievements in insertion order", body = [crate::openapi::AchievementDoc]),
        (status = 500, description = "Store unavailable")
    )
)]
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Achievement>>, JsonApiError> {
    let list = state.achievements.list().await?;
    info!(count = list.len(), "list achievements");
    Ok(Json(list))
}

#[utoipa::path(
    post, path = "/api/achievements", tag = "achievements",
    request_body = crate::openapi::AchievementCreateDoc,
    responses(
        (status = 200, description = "Created", body = crate::openapi::AchievementDoc),
        (status = 422, description = "Validation Error")
    )
)]
pub async fn create(
    State(state): State<AppState>,
    WithRejection(Json(input), _): WithRejection<Json<AchievementCreate>, JsonApiError>,
) -> Result<Json<Achievement>, JsonApiError> {
    Ok(Json(state.achievements.create(input).await?))
}

#[utoipa::path(
    delete, path = "/api/achievements/{id}", tag = "achievements",
    params(("id" = String, Path, description = "Achievement ID")),
    responses(
        (status = 200, description = "Deleted", body = crate::openapi::MessageResponseDoc),
        (status = 404, description = "Not Found")
    )
)]
pub async fn delete(State(state): State<AppState>, Path(id): Path<String>) -> Result<Json<MessageResponse>, JsonApiError> {
    state.achievements.delete(&id).await?;
    Ok(Json(MessageResponse::new("Achievement deleted successfully")))
}
