use crate::domain::errors::DomainResult;
use crate::domain::job::entity::{ArticleJob, JobStateUpdate, NewArticleJob};
use crate::domain::job::value_objects::JobId;
use crate::domain::user::UserId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

#[async_trait]
pub trait ArticleJobRepository: Send + Sync {
    /// Persists a new job in the `queued` state.
    async fn insert(&self, job: NewArticleJob) -> DomainResult<ArticleJob>;

    async fn find_by_id(&self, id: JobId) -> DomainResult<Option<ArticleJob>>;

    /// Applies `update` only if the stored job still matches its expected
    /// state. A mismatch is reported as `DomainError::Conflict`.
    async fn update_state(&self, update: JobStateUpdate) -> DomainResult<ArticleJob>;

    /// Idea generation jobs created at or after `since`, whatever their state,
    /// except those failed with `ENQUEUE_FAILED_MESSAGE`.
    async fn generation_job_ids_since(
        &self,
        user_id: UserId,
        since: DateTime<Utc>,
    ) -> DomainResult<Vec<JobId>>;
}
