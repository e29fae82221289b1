// src/presentation/http/routes.rs
use crate::presentation::http::controllers::{wizard, worker};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json, Router,
    http::{HeaderValue, Method},
    routing::{get, patch, post},
};
use serde::Serialize;
use std::time::Duration;
use tower_http::{
    compression::CompressionLayer,
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::warn;

pub fn build_router(state: HttpState, allowed_origins: &[String]) -> Router {
    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(origin = %origin, "ignoring invalid CORS origin");
                None
            }
        })
        .collect();
    let allow_origin = if origins.is_empty() {
        AllowOrigin::from(Any)
    } else {
        AllowOrigin::list(origins)
    };

    let cors = CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([Method::GET, Method::POST, Method::PATCH, Method::OPTIONS])
        .allow_headers(Any)
        .max_age(Duration::from_secs(3600));

    Router::new()
        .route("/health", get(health))
        .merge(wizard_routes())
        .merge(worker_routes())
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(cors)
        .layer(Extension(state))
}

fn wizard_routes() -> Router {
    Router::new()
        .route(
            "/api/v1/wizard/generate-ideas",
            post(wizard::generate_ideas),
        )
        .route("/api/v1/wizard/ideas", get(wizard::list_ideas))
        .route(
            "/api/v1/wizard/ideas/{id}/feedback",
            patch(wizard::set_idea_feedback),
        )
        .route(
            "/api/v1/wizard/regeneration-quota",
            get(wizard::regeneration_quota),
        )
        .route(
            "/api/v1/wizard/ideas-status/{job_id}",
            get(wizard::ideas_status),
        )
        .route("/api/v1/wizard/publish", post(wizard::publish))
        .route(
            "/api/v1/wizard/publish-status/{job_id}",
            get(wizard::publish_status),
        )
}

fn worker_routes() -> Router {
    Router::new()
        .route(
            "/internal/worker/jobs/{job_id}/start",
            post(worker::start_job),
        )
        .route(
            "/internal/worker/jobs/{job_id}/progress",
            post(worker::report_progress),
        )
        .route(
            "/internal/worker/jobs/{job_id}/ideas",
            post(worker::complete_idea_generation),
        )
        .route(
            "/internal/worker/jobs/{job_id}/complete",
            post(worker::complete_job),
        )
        .route(
            "/internal/worker/jobs/{job_id}/fail",
            post(worker::fail_job),
        )
        .route(
            "/internal/worker/articles/{article_id}/publishing",
            post(worker::article_publishing),
        )
        .route(
            "/internal/worker/articles/{article_id}/published",
            post(worker::article_published),
        )
        .route(
            "/internal/worker/articles/{article_id}/failed",
            post(worker::article_failed),
        )
}

#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub status: String,
}

pub async fn health() -> Json<StatusResponse> {
    Json(StatusResponse {
        status: "ok".into(),
    })
}
