use crate::domain::article::entity::{Article, ArticleStatusUpdate, NewArticle};
use crate::domain::article::value_objects::ArticleId;
use crate::domain::errors::DomainResult;
use crate::domain::job::JobId;
use async_trait::async_trait;

#[async_trait]
pub trait ArticleWriteRepository: Send + Sync {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article>;

    /// Compare-and-set status write; a stale `update` yields `DomainError::Conflict`.
    async fn update_status(&self, update: ArticleStatusUpdate) -> DomainResult<Article>;
}

#[async_trait]
pub trait ArticleReadRepository: Send + Sync {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>>;

    /// Articles created by the given publish job, oldest first.
    async fn find_by_job_id(&self, job_id: JobId) -> DomainResult<Vec<Article>>;
}
