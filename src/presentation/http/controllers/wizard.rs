// src/presentation/http/controllers/wizard.rs
use crate::application::{
    commands::{
        ideas::{GenerateIdeasCommand, SetIdeaFeedbackCommand},
        publish::{PublishArticleItem, PublishArticlesCommand},
    },
    dto::{
        GenerateIdeasDto, IdeaDto, IdeasStatusDto, PublishArticlesDto, PublishStatusDto,
        RegenerationQuotaDto,
    },
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::CurrentUser;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Path, http::StatusCode};
use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
pub struct GenerateIdeasRequest {
    #[serde(default)]
    pub is_regeneration: bool,
}

#[derive(Debug, Deserialize)]
pub struct FeedbackRequest {
    #[serde(default)]
    pub feedback: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct PublishItemRequest {
    pub id: String,
    #[serde(default)]
    pub feedback: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct PublishRequest {
    pub articles: Vec<PublishItemRequest>,
}

pub async fn generate_ideas(
    Extension(state): Extension<HttpState>,
    CurrentUser(user_id): CurrentUser,
    Json(request): Json<GenerateIdeasRequest>,
) -> HttpResult<(StatusCode, Json<GenerateIdeasDto>)> {
    let result = state
        .services
        .idea_commands
        .generate_ideas(
            user_id,
            GenerateIdeasCommand {
                is_regeneration: request.is_regeneration,
            },
        )
        .await
        .into_http()?;
    Ok((StatusCode::ACCEPTED, Json(result)))
}

pub async fn list_ideas(
    Extension(state): Extension<HttpState>,
    CurrentUser(user_id): CurrentUser,
) -> HttpResult<Json<Vec<IdeaDto>>> {
    let ideas = state
        .services
        .wizard_queries
        .list_ideas(user_id)
        .await
        .into_http()?;
    Ok(Json(ideas))
}

pub async fn set_idea_feedback(
    Extension(state): Extension<HttpState>,
    CurrentUser(user_id): CurrentUser,
    Path(idea_id): Path<String>,
    Json(request): Json<FeedbackRequest>,
) -> HttpResult<Json<IdeaDto>> {
    let idea = state
        .services
        .idea_commands
        .set_idea_feedback(
            user_id,
            SetIdeaFeedbackCommand {
                idea_id,
                feedback: request.feedback,
            },
        )
        .await
        .into_http()?;
    Ok(Json(idea))
}

pub async fn regeneration_quota(
    Extension(state): Extension<HttpState>,
    CurrentUser(user_id): CurrentUser,
) -> HttpResult<Json<RegenerationQuotaDto>> {
    let quota = state
        .services
        .wizard_queries
        .get_regeneration_quota(user_id)
        .await
        .into_http()?;
    Ok(Json(quota))
}

pub async fn ideas_status(
    Extension(state): Extension<HttpState>,
    CurrentUser(user_id): CurrentUser,
    Path(job_id): Path<String>,
) -> HttpResult<Json<IdeasStatusDto>> {
    let status = state
        .services
        .wizard_queries
        .get_ideas_status(user_id, &job_id)
        .await
        .into_http()?;
    Ok(Json(status))
}

pub async fn publish(
    Extension(state): Extension<HttpState>,
    CurrentUser(user_id): CurrentUser,
    Json(request): Json<PublishRequest>,
) -> HttpResult<(StatusCode, Json<PublishArticlesDto>)> {
    let command = PublishArticlesCommand {
        articles: request
            .articles
            .into_iter()
            .map(|item| PublishArticleItem {
                idea_id: item.id,
                feedback: item.feedback,
            })
            .collect(),
    };
    let result = state
        .services
        .publish_commands
        .publish_articles(user_id, command)
        .await
        .into_http()?;
    Ok((StatusCode::ACCEPTED, Json(result)))
}

pub async fn publish_status(
    Extension(state): Extension<HttpState>,
    CurrentUser(user_id): CurrentUser,
    Path(job_id): Path<String>,
) -> HttpResult<Json<PublishStatusDto>> {
    let status = state
        .services
        .wizard_queries
        .get_publish_status(user_id, &job_id)
        .await
        .into_http()?;
    Ok(Json(status))
}
