// src/infrastructure/repositories/jobs.rs
use super::map_sqlx;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::job::{
    ArticleJob, ArticleJobRepository, ENQUEUE_FAILED_MESSAGE, JobId, JobPayload, JobStateUpdate,
    JobStatus, JobType, NewArticleJob, Progress,
};
use crate::domain::user::UserId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::Value;
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

const JOB_COLUMNS: &str =
    "id, user_id, job_type, status, progress, payload, error_message, created_at, updated_at";

#[derive(Clone)]
pub struct PostgresArticleJobRepository {
    pool: PgPool,
}

impl PostgresArticleJobRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct JobRow {
    id: Uuid,
    user_id: Uuid,
    job_type: String,
    status: String,
    progress: i16,
    payload: Value,
    error_message: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<JobRow> for ArticleJob {
    type Error = DomainError;

    fn try_from(row: JobRow) -> Result<Self, Self::Error> {
        let job_type: JobType = row.job_type.parse()?;
        Ok(Self {
            id: JobId::new(row.id)?,
            user_id: UserId::new(row.user_id)?,
            job_type,
            status: row.status.parse()?,
            progress: Progress::new(i64::from(row.progress))?,
            payload: JobPayload::from_json(job_type, row.payload)?,
            error_message: row.error_message,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[async_trait]
impl ArticleJobRepository for PostgresArticleJobRepository {
    async fn insert(&self, job: NewArticleJob) -> DomainResult<ArticleJob> {
        let job = job.into_job();
        let row = sqlx::query_as::<_, JobRow>(&format!(
            "INSERT INTO article_jobs ({JOB_COLUMNS})
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
             RETURNING {JOB_COLUMNS}"
        ))
        .bind(job.id.as_uuid())
        .bind(job.user_id.as_uuid())
        .bind(job.job_type.as_str())
        .bind(job.status.as_str())
        .bind(i16::from(job.progress))
        .bind(job.payload.to_json()?)
        .bind(job.error_message.as_deref())
        .bind(job.created_at)
        .bind(job.updated_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        ArticleJob::try_from(row)
    }

    async fn find_by_id(&self, id: JobId) -> DomainResult<Option<ArticleJob>> {
        let row = sqlx::query_as::<_, JobRow>(&format!(
            "SELECT {JOB_COLUMNS} FROM article_jobs WHERE id = $1"
        ))
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(ArticleJob::try_from).transpose()
    }

    async fn update_state(&self, update: JobStateUpdate) -> DomainResult<ArticleJob> {
        let JobStateUpdate {
            id,
            expected_status,
            expected_progress,
            original_updated_at,
            status,
            progress,
            error_message,
            updated_at,
        } = update;

        let maybe_row = sqlx::query_as::<_, JobRow>(&format!(
            "UPDATE article_jobs
             SET status = $5, progress = $6, error_message = $7, updated_at = $8
             WHERE id = $1 AND status = $2 AND progress = $3 AND updated_at = $4
             RETURNING {JOB_COLUMNS}"
        ))
        .bind(id.as_uuid())
        .bind(expected_status.as_str())
        .bind(i16::from(expected_progress))
        .bind(original_updated_at)
        .bind(status.as_str())
        .bind(i16::from(progress))
        .bind(error_message.as_deref())
        .bind(updated_at)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        let row = maybe_row
            .ok_or_else(|| DomainError::Conflict("job changed concurrently, please retry".into()))?;
        ArticleJob::try_from(row)
    }

    async fn generation_job_ids_since(
        &self,
        user_id: UserId,
        since: DateTime<Utc>,
    ) -> DomainResult<Vec<JobId>> {
        let ids = sqlx::query_scalar::<_, Uuid>(
            "SELECT id FROM article_jobs
             WHERE user_id = $1 AND job_type = $2 AND created_at >= $3
               AND NOT (status = $4 AND COALESCE(error_message, '') = $5)",
        )
        .bind(user_id.as_uuid())
        .bind(JobType::GenerateIdeas.as_str())
        .bind(since)
        .bind(JobStatus::Failed.as_str())
        .bind(ENQUEUE_FAILED_MESSAGE)
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        ids.into_iter().map(JobId::new).collect()
    }
}
