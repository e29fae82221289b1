// src/domain/article/entity.rs
use crate::domain::article::value_objects::{ArticleId, ArticleStatus, ArticleTitle};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::idea::IdeaId;
use crate::domain::job::JobId;
use crate::domain::user::UserId;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Article {
    pub id: ArticleId,
    pub user_id: UserId,
    /// Publish job that created the article.
    pub job_id: JobId,
    pub idea_id: Option<IdeaId>,
    pub title: ArticleTitle,
    pub status: ArticleStatus,
    pub post_url: Option<String>,
    pub error_message: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Article {
    pub fn is_owned_by(&self, user_id: UserId) -> bool {
        self.user_id == user_id
    }

    pub fn mark_publishing(&mut self, now: DateTime<Utc>) -> DomainResult<()> {
        self.status.ensure_transition(ArticleStatus::Publishing)?;
        self.status = ArticleStatus::Publishing;
        self.updated_at = now;
        Ok(())
    }

    pub fn mark_published(
        &mut self,
        post_url: impl Into<String>,
        now: DateTime<Utc>,
    ) -> DomainResult<()> {
        let post_url = post_url.into();
        if post_url.trim().is_empty() {
            return Err(DomainError::Validation("post url cannot be empty".into()));
        }
        self.status.ensure_transition(ArticleStatus::Published)?;
        self.status = ArticleStatus::Published;
        self.post_url = Some(post_url);
        self.error_message = None;
        self.updated_at = now;
        Ok(())
    }

    pub fn mark_error(&mut self, message: impl Into<String>, now: DateTime<Utc>) -> DomainResult<()> {
        self.status.ensure_transition(ArticleStatus::Error)?;
        self.status = ArticleStatus::Error;
        self.error_message = Some(message.into());
        self.updated_at = now;
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct NewArticle {
    pub id: ArticleId,
    pub user_id: UserId,
    pub job_id: JobId,
    pub idea_id: Option<IdeaId>,
    pub title: ArticleTitle,
    pub created_at: DateTime<Utc>,
}

impl NewArticle {
    pub fn new(
        user_id: UserId,
        job_id: JobId,
        idea_id: Option<IdeaId>,
        title: ArticleTitle,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: ArticleId::generate(),
            user_id,
            job_id,
            idea_id,
            title,
            created_at,
        }
    }

    /// Articles are created while their content is still being generated.
    pub fn into_article(self) -> Article {
        Article {
            id: self.id,
            user_id: self.user_id,
            job_id: self.job_id,
            idea_id: self.idea_id,
            title: self.title,
            status: ArticleStatus::Generating,
            post_url: None,
            error_message: None,
            created_at: self.created_at,
            updated_at: self.created_at,
        }
    }
}

/// Status write guarded by the status and timestamp the caller last saw.
#[derive(Debug, Clone)]
pub struct ArticleStatusUpdate {
    pub id: ArticleId,
    pub expected_status: ArticleStatus,
    pub original_updated_at: DateTime<Utc>,
    pub status: ArticleStatus,
    pub post_url: Option<String>,
    pub error_message: Option<String>,
    pub updated_at: DateTime<Utc>,
}

impl ArticleStatusUpdate {
    pub fn between(before: &Article, after: &Article) -> Self {
        Self {
            id: after.id,
            expected_status: before.status,
            original_updated_at: before.updated_at,
            status: after.status,
            post_url: after.post_url.clone(),
            error_message: after.error_message.clone(),
            updated_at: after.updated_at,
        }
    }

    pub fn matches(&self, stored: &Article) -> bool {
        stored.status == self.expected_status && stored.updated_at == self.original_updated_at
    }
}
