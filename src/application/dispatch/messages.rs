// src/application/dispatch/messages.rs
use serde::Serialize;
use uuid::Uuid;

use crate::domain::job::GenerateIdeasPayload;

/// Idea generation task consumed by the content worker.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateIdeasTask {
    pub job_id: Uuid,
    pub user_id: Uuid,
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub payload: GenerateIdeasPayload,
}

impl GenerateIdeasTask {
    pub const KIND: &'static str = "generate_ideas";
}

/// Announces a publish job before its per-article tasks.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PublishJobStarted {
    pub job_id: Uuid,
    pub user_id: Uuid,
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub articles_count: u32,
}

impl PublishJobStarted {
    pub const KIND: &'static str = "publish_articles";
}

/// One article to write and publish.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PublishArticleTask {
    pub article_id: Uuid,
    pub user_id: Uuid,
    pub idea_id: Uuid,
    pub title: String,
    pub summary: String,
    pub feedback: Option<String>,
}
