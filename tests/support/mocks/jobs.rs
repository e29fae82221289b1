// tests/support/mocks/jobs.rs
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use postpilot_core::domain::errors::{DomainError, DomainResult};
use postpilot_core::domain::job::{
    ArticleJob, ArticleJobRepository, ENQUEUE_FAILED_MESSAGE, JobId, JobStateUpdate, JobStatus,
    JobType, NewArticleJob,
};
use postpilot_core::domain::user::UserId;
use std::sync::Mutex;

/// Job table with the same compare-and-set semantics as the SQL adapter.
#[derive(Default)]
pub struct InMemoryJobs {
    inner: Mutex<Vec<ArticleJob>>,
}

impl InMemoryJobs {
    pub fn all(&self) -> Vec<ArticleJob> {
        self.inner.lock().unwrap().clone()
    }

    pub fn get(&self, id: JobId) -> ArticleJob {
        self.all().into_iter().find(|job| job.id == id).unwrap()
    }

    pub fn for_user(&self, user_id: UserId) -> Vec<ArticleJob> {
        self.all()
            .into_iter()
            .filter(|job| job.user_id == user_id)
            .collect()
    }
}

#[async_trait]
impl ArticleJobRepository for InMemoryJobs {
    async fn insert(&self, job: NewArticleJob) -> DomainResult<ArticleJob> {
        let job = job.into_job();
        self.inner.lock().unwrap().push(job.clone());
        Ok(job)
    }

    async fn find_by_id(&self, id: JobId) -> DomainResult<Option<ArticleJob>> {
        Ok(self
            .inner
            .lock()
            .unwrap()
            .iter()
            .find(|job| job.id == id)
            .cloned())
    }

    async fn update_state(&self, update: JobStateUpdate) -> DomainResult<ArticleJob> {
        let mut jobs = self.inner.lock().unwrap();
        let stored = jobs
            .iter_mut()
            .find(|job| job.id == update.id)
            .ok_or_else(|| DomainError::NotFound("job not found".into()))?;
        if !update.matches(stored) {
            return Err(DomainError::Conflict("job was modified concurrently".into()));
        }
        stored.status = update.status;
        stored.progress = update.progress;
        stored.error_message = update.error_message;
        stored.updated_at = update.updated_at;
        Ok(stored.clone())
    }

    async fn generation_job_ids_since(
        &self,
        user_id: UserId,
        since: DateTime<Utc>,
    ) -> DomainResult<Vec<JobId>> {
        Ok(self
            .inner
            .lock()
            .unwrap()
            .iter()
            .filter(|job| {
                job.user_id == user_id
                    && job.job_type == JobType::GenerateIdeas
                    && job.created_at >= since
                    && !(job.status == JobStatus::Failed
                        && job.error_message.as_deref() == Some(ENQUEUE_FAILED_MESSAGE))
            })
            .map(|job| job.id)
            .collect())
    }
}
