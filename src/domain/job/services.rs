// src/domain/job/services.rs
use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::job::entity::{ArticleJob, JobStateUpdate, NewArticleJob};
use crate::domain::job::repository::ArticleJobRepository;
use crate::domain::job::value_objects::{JobId, JobStatus, Progress};

/// Owns every write to an `ArticleJob`. Each write loads the job, runs the
/// forward-only transition and stores the result with a compare-and-set, so
/// a terminal job is never modified.
pub struct JobStore {
    repo: Arc<dyn ArticleJobRepository>,
}

impl JobStore {
    pub fn new(repo: Arc<dyn ArticleJobRepository>) -> Self {
        Self { repo }
    }

    pub async fn create(&self, job: NewArticleJob) -> DomainResult<ArticleJob> {
        self.repo.insert(job).await
    }

    pub async fn find(&self, id: JobId) -> DomainResult<Option<ArticleJob>> {
        self.repo.find_by_id(id).await
    }

    pub async fn update_status(
        &self,
        id: JobId,
        status: JobStatus,
        progress: Progress,
        now: DateTime<Utc>,
    ) -> DomainResult<ArticleJob> {
        let before = self.load(id).await?;
        let mut after = before.clone();
        after.advance(status, progress, now)?;
        self.repo
            .update_state(JobStateUpdate::between(&before, &after))
            .await
    }

    pub async fn update_error(
        &self,
        id: JobId,
        message: &str,
        now: DateTime<Utc>,
    ) -> DomainResult<ArticleJob> {
        let before = self.load(id).await?;
        let mut after = before.clone();
        after.fail(message, now)?;
        self.repo
            .update_state(JobStateUpdate::between(&before, &after))
            .await
    }

    async fn load(&self, id: JobId) -> DomainResult<ArticleJob> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::NotFound(format!("job {id} not found")))
    }
}
