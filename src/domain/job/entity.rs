// src/domain/job/entity.rs
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::job::payload::JobPayload;
use crate::domain::job::value_objects::{JobId, JobStatus, JobType, Progress};
use crate::domain::user::UserId;
use chrono::{DateTime, Utc};

/// Error recorded on a job whose task never reached the queue.
pub const ENQUEUE_FAILED_MESSAGE: &str = "failed to enqueue for processing";

#[derive(Debug, Clone)]
pub struct ArticleJob {
    pub id: JobId,
    pub user_id: UserId,
    pub job_type: JobType,
    pub status: JobStatus,
    pub progress: Progress,
    pub payload: JobPayload,
    pub error_message: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ArticleJob {
    pub fn is_owned_by(&self, user_id: UserId) -> bool {
        self.user_id == user_id
    }

    /// Moves the job along the forward-only state machine. Progress never
    /// decreases while the job is running; completion pins it to 100.
    pub fn advance(
        &mut self,
        status: JobStatus,
        progress: Progress,
        now: DateTime<Utc>,
    ) -> DomainResult<()> {
        self.status.ensure_transition(status)?;
        if status == JobStatus::Failed {
            return Err(DomainError::Validation(
                "a failed job needs an error message".into(),
            ));
        }

        self.status = status;
        self.progress = if status == JobStatus::Completed {
            Progress::COMPLETE
        } else {
            self.progress.max(progress)
        };
        self.error_message = None;
        self.updated_at = now;
        Ok(())
    }

    pub fn fail(&mut self, message: impl Into<String>, now: DateTime<Utc>) -> DomainResult<()> {
        self.status.ensure_transition(JobStatus::Failed)?;
        let message = message.into();
        if message.trim().is_empty() {
            return Err(DomainError::Validation("error message cannot be empty".into()));
        }
        self.status = JobStatus::Failed;
        self.error_message = Some(message);
        self.updated_at = now;
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct NewArticleJob {
    pub id: JobId,
    pub user_id: UserId,
    pub payload: JobPayload,
    pub created_at: DateTime<Utc>,
}

impl NewArticleJob {
    pub fn new(user_id: UserId, payload: JobPayload, created_at: DateTime<Utc>) -> Self {
        Self {
            id: JobId::generate(),
            user_id,
            payload,
            created_at,
        }
    }

    /// Every job starts queued with no progress.
    pub fn into_job(self) -> ArticleJob {
        ArticleJob {
            id: self.id,
            user_id: self.user_id,
            job_type: self.payload.job_type(),
            status: JobStatus::Queued,
            progress: Progress::default(),
            payload: self.payload,
            error_message: None,
            created_at: self.created_at,
            updated_at: self.created_at,
        }
    }
}

/// Compare-and-set write of a job's mutable state. The write only lands when
/// the stored job still has `expected_status`, `expected_progress` and
/// `original_updated_at`.
#[derive(Debug, Clone)]
pub struct JobStateUpdate {
    pub id: JobId,
    pub expected_status: JobStatus,
    pub expected_progress: Progress,
    pub original_updated_at: DateTime<Utc>,
    pub status: JobStatus,
    pub progress: Progress,
    pub error_message: Option<String>,
    pub updated_at: DateTime<Utc>,
}

impl JobStateUpdate {
    pub fn between(before: &ArticleJob, after: &ArticleJob) -> Self {
        Self {
            id: after.id,
            expected_status: before.status,
            expected_progress: before.progress,
            original_updated_at: before.updated_at,
            status: after.status,
            progress: after.progress,
            error_message: after.error_message.clone(),
            updated_at: after.updated_at,
        }
    }

    pub fn matches(&self, stored: &ArticleJob) -> bool {
        stored.status == self.expected_status
            && stored.progress == self.expected_progress
            && stored.updated_at == self.original_updated_at
    }
}
