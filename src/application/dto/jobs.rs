use crate::domain::article::Article;
use crate::domain::job::ArticleJob;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::serde_time;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobDto {
    pub id: String,
    pub job_type: String,
    pub status: String,
    pub progress: u8,
    #[serde(default)]
    pub error_message: Option<String>,
    #[serde(with = "serde_time")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "serde_time")]
    pub updated_at: DateTime<Utc>,
}

impl From<ArticleJob> for JobDto {
    fn from(job: ArticleJob) -> Self {
        Self {
            id: job.id.to_string(),
            job_type: job.job_type.to_string(),
            status: job.status.to_string(),
            progress: job.progress.value(),
            error_message: job.error_message,
            created_at: job.created_at,
            updated_at: job.updated_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArticleDto {
    pub id: String,
    pub job_id: String,
    #[serde(default)]
    pub idea_id: Option<String>,
    pub title: String,
    pub status: String,
    #[serde(default)]
    pub post_url: Option<String>,
    #[serde(default)]
    pub error_message: Option<String>,
    #[serde(with = "serde_time")]
    pub updated_at: DateTime<Utc>,
}

impl From<Article> for ArticleDto {
    fn from(article: Article) -> Self {
        Self {
            id: article.id.to_string(),
            job_id: article.job_id.to_string(),
            idea_id: article.idea_id.map(|id| id.to_string()),
            title: article.title.into(),
            status: article.status.to_string(),
            post_url: article.post_url,
            error_message: article.error_message,
            updated_at: article.updated_at,
        }
    }
}
