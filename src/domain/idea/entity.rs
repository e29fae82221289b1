// src/domain/idea/entity.rs
use crate::domain::idea::value_objects::{Feedback, IdeaId, IdeaSummary, IdeaTitle};
use crate::domain::job::JobId;
use crate::domain::user::UserId;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct ArticleIdea {
    pub id: IdeaId,
    pub user_id: UserId,
    pub job_id: JobId,
    pub title: IdeaTitle,
    pub summary: IdeaSummary,
    pub approved: bool,
    pub feedback: Option<Feedback>,
    pub generated_at: DateTime<Utc>,
}

impl ArticleIdea {
    pub fn is_owned_by(&self, user_id: UserId) -> bool {
        self.user_id == user_id
    }
}

/// An idea produced by a generation job, not yet persisted.
#[derive(Debug, Clone)]
pub struct NewArticleIdea {
    pub id: IdeaId,
    pub user_id: UserId,
    pub job_id: JobId,
    pub title: IdeaTitle,
    pub summary: IdeaSummary,
    pub generated_at: DateTime<Utc>,
}

impl NewArticleIdea {
    pub fn new(
        user_id: UserId,
        job_id: JobId,
        title: IdeaTitle,
        summary: IdeaSummary,
        generated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: IdeaId::generate(),
            user_id,
            job_id,
            title,
            summary,
            generated_at,
        }
    }

    pub fn into_idea(self) -> ArticleIdea {
        ArticleIdea {
            id: self.id,
            user_id: self.user_id,
            job_id: self.job_id,
            title: self.title,
            summary: self.summary,
            approved: false,
            feedback: None,
            generated_at: self.generated_at,
        }
    }
}
