//! Smoke checks against a running deployment.
//!
//! Usage: `repair-academy-smoke [BASE_URL]` (or `SMOKE_BASE_URL`), where
//! `BASE_URL` is the host root; requests go to `<BASE_URL>/api/...`.

use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::{Client, Method, StatusCode};
use serde_json::{json, Value};
use tracing::{error, info, warn};

const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8001";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

struct Failure {
    name: String,
    reason: String,
}

struct SmokeRunner {
    client: Client,
    api_url: String,
    run: u32,
    passed: u32,
    failures: Vec<Failure>,
}

impl SmokeRunner {
    fn new(base_url: &str) -> Result<Self> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .context("building http client")?;
        Ok(Self {
            client,
            api_url: format!("{}/api", base_url.trim_end_matches('/')),
            run: 0,
            passed: 0,
            failures: Vec::new(),
        })
    }

    /// Issue one request and compare the status. Returns the JSON body on a match.
    async fn check(
        &mut self,
        name: &str,
        method: Method,
        endpoint: &str,
        expected: StatusCode,
        body: Option<&Value>,
        query: &[(&str, &str)],
    ) -> Option<Value> {
        self.run += 1;
        let url = format!("{}/{}", self.api_url, endpoint);
        info!(check = name, %method, %url, "running");

        let mut req = self.client.request(method, &url).query(query);
        if let Some(b) = body {
            req = req.json(b);
        }

        let res = match req.send().await {
            Ok(r) => r,
            Err(e) => {
                self.fail(name, format!("request error: {e}"));
                return None;
            }
        };
        let status = res.status();
        let text = res.text().await.unwrap_or_default();
        if status != expected {
            self.fail(name, format!("expected {expected}, got {status}: {text}"));
            return None;
        }
        self.passed += 1;
        info!(check = name, %status, "passed");
        Some(serde_json::from_str(&text).unwrap_or(Value::Null))
    }

    fn fail(&mut self, name: &str, reason: String) {
        error!(check = name, %reason, "failed");
        self.failures.push(Failure { name: name.to_string(), reason });
    }

    fn expect(&mut self, name: &str, ok: bool, reason: &str) {
        if !ok {
            self.fail(name, reason.to_string());
        }
    }
}

async fn run(base_url: &str) -> Result<SmokeRunner> {
    let mut r = SmokeRunner::new(base_url)?;
    let stamp = chrono::Utc::now().format("%H%M%S").to_string();

    r.check("root", Method::GET, "", StatusCode::OK, None, &[]).await;

    if let Some(services) = r.check("list services", Method::GET, "services", StatusCode::OK, None, &[]).await {
        let n = services.as_array().map(Vec::len).unwrap_or(0);
        if n < 6 {
            warn!(found = n, "expected at least 6 services");
        }
    }

    if let Some(courses) = r.check("list courses", Method::GET, "courses", StatusCode::OK, None, &[]).await {
        let n = courses.as_array().map(Vec::len).unwrap_or(0);
        r.expect("list courses", n == 4, "expected 4 courses");
    }

    r.check("list achievements", Method::GET, "achievements", StatusCode::OK, None, &[]).await;
    r.check("list enrollments", Method::GET, "enrollments", StatusCode::OK, None, &[]).await;

    let enrollment = json!({
        "full_name": format!("Test Student {stamp}"),
        "email": format!("test{stamp}@example.com"),
        "phone": "+91 9876543210",
        "address": "Test Address, Test City",
        "qualification": "Graduate",
        "course": "Basic Mobile Repair Course",
        "message": "Test enrollment message"
    });
    let enrollment_id = r
        .check("create enrollment", Method::POST, "enrollments", StatusCode::OK, Some(&enrollment), &[])
        .await
        .and_then(|v| v["id"].as_str().map(str::to_string));

    let achievement = json!({
        "student_name": format!("Test Graduate {stamp}"),
        "course_completed": "Basic Mobile Repair Course",
        "completion_date": "March 2024",
        "testimonial": "Great course! Learned a lot.",
        "placed_at": "Tech Solutions Pvt Ltd"
    });
    let achievement_id = r
        .check("create achievement", Method::POST, "achievements", StatusCode::OK, Some(&achievement), &[])
        .await
        .and_then(|v| v["id"].as_str().map(str::to_string));

    match enrollment_id {
        Some(id) => {
            let endpoint = format!("enrollments/{id}/status");
            r.check("update enrollment status", Method::PATCH, &endpoint, StatusCode::OK, None, &[("status", "approved")])
                .await;
            if let Some(list) = r.check("list enrollments after update", Method::GET, "enrollments", StatusCode::OK, None, &[]).await {
                let approved = list
                    .as_array()
                    .map(|items| items.iter().any(|e| e["id"] == id.as_str() && e["status"] == "approved"))
                    .unwrap_or(false);
                r.expect("list enrollments after update", approved, "updated enrollment not approved");
            }
        }
        None => r.fail("update enrollment status", "skipped: no enrollment id".into()),
    }

    match achievement_id {
        Some(id) => {
            let endpoint = format!("achievements/{id}");
            r.check("delete achievement", Method::DELETE, &endpoint, StatusCode::OK, None, &[]).await;
            r.check("delete achievement again", Method::DELETE, &endpoint, StatusCode::NOT_FOUND, None, &[]).await;
        }
        None => r.fail("delete achievement", "skipped: no achievement id".into()),
    }

    Ok(r)
}

#[tokio::main]
async fn main() -> std::process::ExitCode {
    dotenvy::dotenv().ok();
    common::utils::logging::init_logging_from_env();

    let base_url = std::env::args()
        .nth(1)
        .or_else(|| std::env::var("SMOKE_BASE_URL").ok())
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
    info!(%base_url, "starting smoke checks");

    let r = match run(&base_url).await {
        Ok(r) => r,
        Err(e) => {
            error!(error = %e, "smoke run aborted");
            return std::process::ExitCode::FAILURE;
        }
    };
    println!("{}/{} checks passed", r.passed, r.run);
    for f in &r.failures {
        println!("  FAILED {}: {}", f.name, f.reason);
    }
    if r.failures.is_empty() {
        std::process::ExitCode::SUCCESS
    } else {
        std::process::ExitCode::FAILURE
    }
}
