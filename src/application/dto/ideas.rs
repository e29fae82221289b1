use crate::domain::idea::ArticleIdea;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::serde_time;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IdeaDto {
    pub id: String,
    pub job_id: String,
    pub title: String,
    pub summary: String,
    pub approved: bool,
    #[serde(default)]
    pub feedback: Option<String>,
    #[serde(with = "serde_time")]
    pub generated_at: DateTime<Utc>,
}

impl From<ArticleIdea> for IdeaDto {
    fn from(idea: ArticleIdea) -> Self {
        Self {
            id: idea.id.to_string(),
            job_id: idea.job_id.to_string(),
            title: idea.title.into(),
            summary: idea.summary.into(),
            approved: idea.approved,
            feedback: idea.feedback.map(Into::into),
            generated_at: idea.generated_at,
        }
    }
}

/// Result of a generation request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateIdeasDto {
    pub job_id: String,
    pub status: String,
    pub regenerations_remaining: u32,
    pub regenerations_limit: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IdeasStatusDto {
    pub job_id: String,
    pub status: String,
    pub progress: u8,
    pub message: String,
    /// Present once the job is finished.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ideas: Option<Vec<IdeaDto>>,
    #[serde(default)]
    pub error_message: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegenerationQuotaDto {
    pub remaining: u32,
    pub limit: u32,
    pub events_in_window: u32,
}
