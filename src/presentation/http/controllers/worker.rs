// src/presentation/http/controllers/worker.rs
use crate::application::{
    commands::jobs::{
        CompleteIdeaGenerationCommand, FailJobCommand, GeneratedIdea, ReportProgressCommand,
    },
    dto::{ArticleDto, IdeaDto, JobDto},
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::WorkerAuth;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Path};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct ProgressRequest {
    pub progress: i64,
}

#[derive(Debug, Deserialize)]
pub struct GeneratedIdeaRequest {
    pub title: String,
    pub summary: String,
}

#[derive(Debug, Deserialize)]
pub struct IdeasRequest {
    pub ideas: Vec<GeneratedIdeaRequest>,
}

#[derive(Debug, Deserialize)]
pub struct FailureRequest {
    pub error_message: String,
}

#[derive(Debug, Deserialize)]
pub struct PublishedRequest {
    pub post_url: String,
}

pub async fn start_job(
    Extension(state): Extension<HttpState>,
    _worker: WorkerAuth,
    Path(job_id): Path<String>,
) -> HttpResult<Json<JobDto>> {
    let job = state
        .services
        .job_progress
        .start_job(&job_id)
        .await
        .into_http()?;
    Ok(Json(job))
}

pub async fn report_progress(
    Extension(state): Extension<HttpState>,
    _worker: WorkerAuth,
    Path(job_id): Path<String>,
    Json(request): Json<ProgressRequest>,
) -> HttpResult<Json<JobDto>> {
    let job = state
        .services
        .job_progress
        .report_progress(ReportProgressCommand {
            job_id,
            progress: request.progress,
        })
        .await
        .into_http()?;
    Ok(Json(job))
}

pub async fn complete_idea_generation(
    Extension(state): Extension<HttpState>,
    _worker: WorkerAuth,
    Path(job_id): Path<String>,
    Json(request): Json<IdeasRequest>,
) -> HttpResult<Json<Vec<IdeaDto>>> {
    let ideas = request
        .ideas
        .into_iter()
        .map(|idea| GeneratedIdea {
            title: idea.title,
            summary: idea.summary,
        })
        .collect();
    let stored = state
        .services
        .job_progress
        .complete_idea_generation(CompleteIdeaGenerationCommand { job_id, ideas })
        .await
        .into_http()?;
    Ok(Json(stored))
}

pub async fn complete_job(
    Extension(state): Extension<HttpState>,
    _worker: WorkerAuth,
    Path(job_id): Path<String>,
) -> HttpResult<Json<JobDto>> {
    let job = state
        .services
        .job_progress
        .complete_job(&job_id)
        .await
        .into_http()?;
    Ok(Json(job))
}

pub async fn fail_job(
    Extension(state): Extension<HttpState>,
    _worker: WorkerAuth,
    Path(job_id): Path<String>,
    Json(request): Json<FailureRequest>,
) -> HttpResult<Json<JobDto>> {
    let job = state
        .services
        .job_progress
        .fail_job(FailJobCommand {
            job_id,
            error_message: request.error_message,
        })
        .await
        .into_http()?;
    Ok(Json(job))
}

pub async fn article_publishing(
    Extension(state): Extension<HttpState>,
    _worker: WorkerAuth,
    Path(article_id): Path<String>,
) -> HttpResult<Json<ArticleDto>> {
    let article = state
        .services
        .job_progress
        .record_article_publishing(&article_id)
        .await
        .into_http()?;
    Ok(Json(article))
}

pub async fn article_published(
    Extension(state): Extension<HttpState>,
    _worker: WorkerAuth,
    Path(article_id): Path<String>,
    Json(request): Json<PublishedRequest>,
) -> HttpResult<Json<ArticleDto>> {
    let article = state
        .services
        .job_progress
        .record_article_published(&article_id, &request.post_url)
        .await
        .into_http()?;
    Ok(Json(article))
}

pub async fn article_failed(
    Extension(state): Extension<HttpState>,
    _worker: WorkerAuth,
    Path(article_id): Path<String>,
    Json(request): Json<FailureRequest>,
) -> HttpResult<Json<ArticleDto>> {
    let article = state
        .services
        .job_progress
        .record_article_failed(&article_id, &request.error_message)
        .await
        .into_http()?;
    Ok(Json(article))
}
