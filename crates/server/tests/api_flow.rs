use std::sync::Arc;

use axum::body::{to_bytes, Body, Bytes};
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use service::factory::{FixedClock, SequentialIds};
use tower::ServiceExt;
use tower_http::cors::CorsLayer;

use server::routes;
use server::state::AppState;

async fn build_app_with(state_fn: impl FnOnce(sea_orm::DatabaseConnection) -> AppState) -> anyhow::Result<Router> {
    let db = models::db::connect_in_memory().await?;
    models::db::migrate(&db).await?;
    Ok(routes::build_router(state_fn(db), CorsLayer::very_permissive()))
}

async fn build_app() -> anyhow::Result<Router> {
    build_app_with(AppState::new).await
}

async fn send_raw(app: &Router, req: Request<Body>) -> anyhow::Result<(StatusCode, Bytes)> {
    let resp = app.clone().oneshot(req).await?;
    let status = resp.status();
    let bytes = to_bytes(resp.into_body(), usize::MAX).await?;
    Ok((status, bytes))
}

async fn send(app: &Router, req: Request<Body>) -> anyhow::Result<(StatusCode, Value)> {
    let (status, bytes) = send_raw(app, req).await?;
    let body = if bytes.is_empty() { Value::Null } else { serde_json::from_slice(&bytes)? };
    Ok((status, body))
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn post_json(uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(serde_json::to_vec(body).unwrap()))
        .unwrap()
}

fn delete(uri: &str) -> Request<Body> {
    Request::builder().method(Method::DELETE).uri(uri).body(Body::empty()).unwrap()
}

fn patch(uri: &str) -> Request<Body> {
    Request::builder().method(Method::PATCH).uri(uri).body(Body::empty()).unwrap()
}

fn achievement_body() -> Value {
    json!({
        "student_name": "Test Graduate",
        "course_completed": "Basic Mobile Repair Course",
        "completion_date": "March 2024",
        "testimonial": "Great course! Learned a lot.",
        "placed_at": "Tech Solutions Pvt Ltd"
    })
}

fn enrollment_body() -> Value {
    json!({
        "full_name": "Test Student",
        "email": "test@example.com",
        "phone": "+91 9876543210",
        "address": "Test Address, Test City",
        "qualification": "Graduate",
        "course": "Basic Mobile Repair Course",
        "message": "Test enrollment message"
    })
}

#[tokio::test]
async fn root_and_health() -> anyhow::Result<()> {
    let app = build_app().await?;
    let (status, body) = send(&app, get("/api/")).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"message": "Sri Sakthi Vinayaga Mobile Services API"}));

    let (status, body) = send(&app, get("/health")).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    Ok(())
}

#[tokio::test]
async fn services_fall_back_when_store_empty() -> anyhow::Result<()> {
    let app = build_app().await?;
    let (status, body) = send(&app, get("/api/services")).await?;
    assert_eq!(status, StatusCode::OK);
    let items = body.as_array().expect("array");
    assert_eq!(items.len(), 6);
    let ids: Vec<&str> = items.iter().map(|s| s["id"].as_str().unwrap()).collect();
    assert_eq!(ids, vec!["1", "2", "3", "4", "5", "6"]);
    for s in items {
        let featured = s["featured"].as_bool().unwrap();
        assert_eq!(featured, s["id"] == "2" || s["id"] == "3");
    }
    Ok(())
}

#[tokio::test]
async fn courses_are_constant() -> anyhow::Result<()> {
    let app = build_app().await?;
    let (status, first) = send_raw(&app, get("/api/courses")).await?;
    assert_eq!(status, StatusCode::OK);
    let (_, second) = send_raw(&app, get("/api/courses")).await?;
    assert_eq!(first, second);
    let parsed: Value = serde_json::from_slice(&first)?;
    assert_eq!(parsed.as_array().unwrap().len(), 4);
    assert_eq!(parsed[0]["name"], "Basic Mobile Repair Course");
    Ok(())
}

#[tokio::test]
async fn achievement_create_list_delete() -> anyhow::Result<()> {
    let app = build_app().await?;
    let before = chrono::Utc::now();

    let (status, created) = send(&app, post_json("/api/achievements", &achievement_body())).await?;
    assert_eq!(status, StatusCode::OK);
    let id = created["id"].as_str().unwrap().to_string();
    assert!(!id.is_empty());
    assert!(created["photo_url"].is_null());
    let created_at = chrono::DateTime::parse_from_rfc3339(created["created_at"].as_str().unwrap())?;
    assert_eq!(created_at.offset().local_minus_utc(), 0);
    assert!(created_at.timestamp_micros() >= before.timestamp_micros());

    let (_, again) = send(&app, post_json("/api/achievements", &achievement_body())).await?;
    assert_ne!(again["id"], created["id"]);

    let (status, list) = send(&app, get("/api/achievements")).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(list.as_array().unwrap().len(), 2);
    assert_eq!(list[0], created);

    let (status, body) = send(&app, delete(&format!("/api/achievements/{id}"))).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Achievement deleted successfully");

    let (_, list) = send(&app, get("/api/achievements")).await?;
    assert!(list.as_array().unwrap().iter().all(|a| a["id"] != id.as_str()));

    let (status, body) = send(&app, delete(&format!("/api/achievements/{id}"))).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["detail"], "Achievement not found");
    Ok(())
}

#[tokio::test]
async fn unknown_fields_are_ignored() -> anyhow::Result<()> {
    let app = build_app().await?;
    let mut body = achievement_body();
    body["id"] = json!("forged");
    body["created_at"] = json!("1999-01-01T00:00:00+00:00");
    body["is_admin"] = json!(true);

    let (status, created) = send(&app, post_json("/api/achievements", &body)).await?;
    assert_eq!(status, StatusCode::OK);
    assert_ne!(created["id"], "forged");
    assert_ne!(created["created_at"], "1999-01-01T00:00:00+00:00");
    assert!(created.get("is_admin").is_none());
    Ok(())
}

#[tokio::test]
async fn schema_mismatch_is_unprocessable() -> anyhow::Result<()> {
    let app = build_app().await?;

    let mut missing = enrollment_body();
    missing.as_object_mut().unwrap().remove("email");
    let (status, body) = send(&app, post_json("/api/enrollments", &missing)).await?;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["detail"].as_str().unwrap().contains("email"));

    let mut wrong_type = achievement_body();
    wrong_type["student_name"] = json!(42);
    let (status, _) = send(&app, post_json("/api/achievements", &wrong_type)).await?;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    let bad_json = Request::builder()
        .method(Method::POST)
        .uri("/api/achievements")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))?;
    let (status, _) = send(&app, bad_json).await?;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    // nothing was stored
    let (_, list) = send(&app, get("/api/enrollments")).await?;
    assert_eq!(list, json!([]));
    Ok(())
}

#[tokio::test]
async fn json_body_without_json_content_type_is_unprocessable() -> anyhow::Result<()> {
    let app = build_app().await?;
    let payload = serde_json::to_vec(&achievement_body())?;

    let no_type = Request::builder()
        .method(Method::POST)
        .uri("/api/achievements")
        .body(Body::from(payload.clone()))?;
    let (status, body) = send(&app, no_type).await?;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"], "Unprocessable Entity");

    let text_plain = Request::builder()
        .method(Method::POST)
        .uri("/api/achievements")
        .header(header::CONTENT_TYPE, "text/plain")
        .body(Body::from(payload))?;
    let (status, body) = send(&app, text_plain).await?;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"], "Unprocessable Entity");

    let (_, list) = send(&app, get("/api/achievements")).await?;
    assert_eq!(list, json!([]));
    Ok(())
}

#[tokio::test]
async fn list_is_capped_at_one_hundred_in_insertion_order() -> anyhow::Result<()> {
    let app = build_app_with(|db| {
        AppState::with_factories(db, Arc::new(SequentialIds::new("e")), Arc::new(FixedClock::at_timestamp(1_709_287_200)))
    })
    .await?;

    for _ in 0..101 {
        let (status, _) = send(&app, post_json("/api/enrollments", &enrollment_body())).await?;
        assert_eq!(status, StatusCode::OK);
    }

    let (status, list) = send(&app, get("/api/enrollments")).await?;
    assert_eq!(status, StatusCode::OK);
    let items = list.as_array().unwrap();
    assert_eq!(items.len(), 100);
    assert_eq!(items[0]["id"], "e-1");
    assert_eq!(items[99]["id"], "e-100");
    Ok(())
}

#[tokio::test]
async fn enrollment_status_lifecycle() -> anyhow::Result<()> {
    let app = build_app().await?;

    let (status, created) = send(&app, post_json("/api/enrollments", &enrollment_body())).await?;
    assert_eq!(status, StatusCode::OK);
    let id = created["id"].as_str().unwrap().to_string();
    assert_eq!(created["status"], "pending");

    let (_, list) = send(&app, get("/api/enrollments")).await?;
    assert_eq!(list[0]["status"], "pending");

    let (status, body) = send(&app, patch(&format!("/api/enrollments/{id}/status?status=approved"))).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Status updated successfully");

    let (_, list) = send(&app, get("/api/enrollments")).await?;
    let mut expected = created.clone();
    expected["status"] = json!("approved");
    assert_eq!(list[0], expected);
    Ok(())
}

#[tokio::test]
async fn status_update_errors() -> anyhow::Result<()> {
    let app = build_app().await?;

    let (status, body) = send(&app, patch("/api/enrollments/does-not-exist/status?status=approved")).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["detail"], "Enrollment not found");

    let (_, created) = send(&app, post_json("/api/enrollments", &enrollment_body())).await?;
    let id = created["id"].as_str().unwrap();
    let (status, _) = send(&app, patch(&format!("/api/enrollments/{id}/status"))).await?;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    Ok(())
}

#[tokio::test]
async fn repeated_status_param_uses_last_value() -> anyhow::Result<()> {
    let app = build_app().await?;
    let (_, created) = send(&app, post_json("/api/enrollments", &enrollment_body())).await?;
    let id = created["id"].as_str().unwrap();

    let (status, _) = send(&app, patch(&format!("/api/enrollments/{id}/status?status=contacted&status=approved"))).await?;
    assert_eq!(status, StatusCode::OK);

    let (_, list) = send(&app, get("/api/enrollments")).await?;
    assert_eq!(list[0]["status"], "approved");
    Ok(())
}

#[tokio::test]
async fn status_accepted_from_form_body() -> anyhow::Result<()> {
    let app = build_app().await?;
    let (_, created) = send(&app, post_json("/api/enrollments", &enrollment_body())).await?;
    let id = created["id"].as_str().unwrap();

    let req = Request::builder()
        .method(Method::PATCH)
        .uri(format!("/api/enrollments/{id}/status"))
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from("status=contacted"))?;
    let (status, _) = send(&app, req).await?;
    assert_eq!(status, StatusCode::OK);

    let (_, list) = send(&app, get("/api/enrollments")).await?;
    assert_eq!(list[0]["status"], "contacted");
    Ok(())
}

#[tokio::test]
async fn repeated_reads_are_identical() -> anyhow::Result<()> {
    let app = build_app().await?;
    send(&app, post_json("/api/achievements", &achievement_body())).await?;
    send(&app, post_json("/api/enrollments", &enrollment_body())).await?;
    for uri in ["/api/services", "/api/achievements", "/api/enrollments", "/api/courses"] {
        let (_, a) = send_raw(&app, get(uri)).await?;
        let (_, b) = send_raw(&app, get(uri)).await?;
        assert_eq!(a, b, "{uri} changed between reads");
    }
    Ok(())
}

#[tokio::test]
async fn injected_factories_drive_generated_fields() -> anyhow::Result<()> {
    let app = build_app_with(|db| {
        AppState::with_factories(db, Arc::new(SequentialIds::new("t")), Arc::new(FixedClock::at_timestamp(1_709_287_200)))
    })
    .await?;

    let (_, a) = send(&app, post_json("/api/achievements", &achievement_body())).await?;
    let (_, e) = send(&app, post_json("/api/enrollments", &enrollment_body())).await?;
    assert_eq!(a["id"], "t-1");
    assert_eq!(e["id"], "t-2");
    assert_eq!(a["created_at"], "2024-03-01T10:00:00.000000+00:00");
    assert_eq!(e["created_at"], "2024-03-01T10:00:00.000000+00:00");
    Ok(())
}

#[tokio::test]
async fn cors_preflight_mirrors_origin_with_credentials() -> anyhow::Result<()> {
    let app = build_app().await?;
    let req = Request::builder()
        .method(Method::OPTIONS)
        .uri("/api/enrollments")
        .header(header::ORIGIN, "https://academy.example")
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
        .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "content-type")
        .body(Body::empty())?;
    let resp = app.clone().oneshot(req).await?;
    assert!(resp.status().is_success());
    let headers = resp.headers();
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_ORIGIN], "https://academy.example");
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_CREDENTIALS], "true");
    Ok(())
}

#[tokio::test]
async fn openapi_document_served() -> anyhow::Result<()> {
    let app = build_app().await?;
    let (status, doc) = send(&app, get("/api-docs/openapi.json")).await?;
    assert_eq!(status, StatusCode::OK);
    assert!(doc["paths"].get("/api/enrollments/{id}/status").is_some());
    Ok(())
}
