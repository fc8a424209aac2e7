use axum::Json;
use common::types::MessageResponse;

pub const API_GREETING: &str = "Sri Sakthi Vinayaga Mobile Services API";

#[utoipa::path(get, path = "/api/", tag = "root", responses((status = 200, description = "API greeting", body = crate::openapi::MessageResponseDoc)))]
pub async fn root() -> Json<MessageResponse> {
    Json(MessageResponse::new(API_GREETING))
}
