// src/application/queries/wizard/status.rs
use tracing::{debug, warn};

use super::WizardQueryService;
use crate::{
    application::{
        dto::{IdeasStatusDto, PublishStatusDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        article::ArticleStatus,
        job::{ArticleJob, JobId, JobStatus, JobType},
        user::UserId,
    },
};

pub const fn ideas_status_message(status: JobStatus) -> &'static str {
    match status {
        JobStatus::Queued => "Waiting to be processed...",
        JobStatus::Processing => "Generating article ideas...",
        JobStatus::Completed => "Ideas generated successfully!",
        JobStatus::Failed => "Could not generate ideas. Please try again.",
    }
}

pub const fn publish_status_message(status: JobStatus) -> &'static str {
    match status {
        JobStatus::Queued => "Waiting to be processed...",
        JobStatus::Processing => "Publishing articles...",
        JobStatus::Completed => "Articles published successfully!",
        JobStatus::Failed => "Could not publish articles. Please try again.",
    }
}

impl WizardQueryService {
    pub async fn get_ideas_status(
        &self,
        user_id: UserId,
        job_id: &str,
    ) -> ApplicationResult<IdeasStatusDto> {
        let job = self
            .owned_job_of_type(user_id, job_id, JobType::GenerateIdeas)
            .await?;

        let ideas = if job.status.is_terminal() {
            let ideas = self.idea_read.find_by_job_id(job.id).await?;
            Some(ideas.into_iter().map(Into::into).collect())
        } else {
            None
        };

        Ok(IdeasStatusDto {
            job_id: job.id.to_string(),
            status: job.status.to_string(),
            progress: job.progress.value(),
            message: ideas_status_message(job.status).into(),
            ideas,
            error_message: job.error_message,
        })
    }

    /// `total` comes from the job payload. `published` is the full total
    /// once the job completed, otherwise the articles of this job already
    /// published.
    pub async fn get_publish_status(
        &self,
        user_id: UserId,
        job_id: &str,
    ) -> ApplicationResult<PublishStatusDto> {
        let job = self
            .owned_job_of_type(user_id, job_id, JobType::Publish)
            .await?;
        let payload = job
            .payload
            .as_publish()
            .ok_or(ApplicationError::InvalidJobType)?;
        let total = payload.articles_count;

        let published = if job.status == JobStatus::Completed {
            total
        } else {
            let articles = self.article_read.find_by_job_id(job.id).await?;
            let done = articles
                .iter()
                .filter(|article| article.status == ArticleStatus::Published)
                .count();
            u32::try_from(done).unwrap_or(u32::MAX)
        };

        debug!(job_id = %job.id, status = %job.status, published, total, "publish status read");

        Ok(PublishStatusDto {
            job_id: job.id.to_string(),
            status: job.status.to_string(),
            progress: job.progress.value(),
            published,
            total,
            message: publish_status_message(job.status).into(),
            error_message: job.error_message,
        })
    }

    /// Ownership is checked before the job type so a foreign job never
    /// reveals what kind of job it is.
    async fn owned_job_of_type(
        &self,
        user_id: UserId,
        job_id: &str,
        expected: JobType,
    ) -> ApplicationResult<ArticleJob> {
        let id = JobId::parse(job_id)?;
        let job = self
            .job_repo
            .find_by_id(id)
            .await?
            .ok_or(ApplicationError::JobNotFound)?;
        if !job.is_owned_by(user_id) {
            warn!(user_id = %user_id, job_id = %id, "job owned by another user");
            return Err(ApplicationError::AccessDenied);
        }
        if job.job_type != expected {
            return Err(ApplicationError::InvalidJobType);
        }
        Ok(job)
    }
}
