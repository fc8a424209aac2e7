use axum::{
    extract::{Path, Query, State},
    Form, Json,
};
use axum_extra::extract::WithRejection;
use common::types::MessageResponse;
use models::enrollment::{Enrollment, EnrollmentCreate};
use tracing::info;

use crate::{errors::JsonApiError, state::AppState};

/// Query/form parameters of the status update.
#[derive(Debug, utoipa::IntoParams)]
#[into_params(parameter_in = Query)]
pub struct StatusParams {
    /// New status label, e.g. `approved`.
    pub status: Option<String>,
}

type Pairs = Vec<(String, String)>;

/// Last `status` value wins when the key repeats.
fn last_status(pairs: Pairs) -> Option<String> {
    pairs.into_iter().filter(|(k, _)| k == "status").map(|(_, v)| v).last()
}

#[utoipa::path(
    get, path = "/api/enrollments", tag = "enrollments",
    responses(
        (status = 200, description = "Up to 100 enrollments in insertion order", body = [crate::openapi::EnrollmentDoc]),
        (status = 500, description = "Store unavailable")
    )
)]
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Enrollment>>, JsonApiError> {
    let list = state.enrollments.list().await?;
    info!(count = list.len(), "list enrollments");
    Ok(Json(list))
}

#[utoipa::path(
    post, path = "/api/enrollments", tag = "enrollments",
    request_body = crate::openapi::EnrollmentCreateDoc,
    responses(
        (status = 200, description = "Created", body = crate::openapi::EnrollmentDoc),
        (status = 422, description = "Validation Error")
    )
)]
pub async fn create(
    State(state): State<AppState>,
    WithRejection(Json(input), _): WithRejection<Json<EnrollmentCreate>, JsonApiError>,
) -> Result<Json<Enrollment>, JsonApiError> {
    Ok(Json(state.enrollments.create(input).await?))
}

/// `status` comes from the query string; a form-encoded body is the fallback.
#[utoipa::path(
    patch, path = "/api/enrollments/{id}/status", tag = "enrollments",
    params(("id" = String, Path, description = "Enrollment ID"), StatusParams),
    responses(
        (status = 200, description = "Updated", body = crate::openapi::MessageResponseDoc),
        (status = 404, description = "Not Found"),
        (status = 422, description = "Missing status")
    )
)]
pub async fn update_status(
    State(state): State<AppState>,
    Path(id): Path<String>,
    WithRejection(Query(query), _): WithRejection<Query<Pairs>, JsonApiError>,
    form: Option<Form<Pairs>>,
) -> Result<Json<MessageResponse>, JsonApiError> {
    let status = last_status(query)
        .or_else(|| form.and_then(|Form(f)| last_status(f)))
        .ok_or_else(|| JsonApiError::missing_field("status"))?;
    state.enrollments.update_status(&id, &status).await?;
    Ok(Json(MessageResponse::new("Status updated successfully")))
}
