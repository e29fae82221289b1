// src/application/commands/jobs/progress.rs
use tracing::{info, warn};

use super::JobProgressService;
use crate::{
    application::{
        dto::{IdeaDto, JobDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        idea::{IdeaSummary, IdeaTitle, NewArticleIdea},
        job::{ArticleJob, JobId, JobStatus, JobType, Progress},
    },
};

pub struct ReportProgressCommand {
    pub job_id: String,
    pub progress: i64,
}

pub struct GeneratedIdea {
    pub title: String,
    pub summary: String,
}

pub struct CompleteIdeaGenerationCommand {
    pub job_id: String,
    pub ideas: Vec<GeneratedIdea>,
}

pub struct FailJobCommand {
    pub job_id: String,
    pub error_message: String,
}

impl JobProgressService {
    pub async fn start_job(&self, job_id: &str) -> ApplicationResult<JobDto> {
        let id = JobId::parse(job_id)?;
        let job = self
            .jobs
            .update_status(id, JobStatus::Processing, Progress::default(), self.clock.now())
            .await?;
        info!(job_id = %id, "job started");
        Ok(job.into())
    }

    pub async fn report_progress(&self, command: ReportProgressCommand) -> ApplicationResult<JobDto> {
        let id = JobId::parse(&command.job_id)?;
        let progress = Progress::new(command.progress)?;
        let job = self
            .jobs
            .update_status(id, JobStatus::Processing, progress, self.clock.now())
            .await?;
        Ok(job.into())
    }

    /// Stores the ideas a generation job produced, then completes the job.
    pub async fn complete_idea_generation(
        &self,
        command: CompleteIdeaGenerationCommand,
    ) -> ApplicationResult<Vec<IdeaDto>> {
        let id = JobId::parse(&command.job_id)?;
        let job = self.load(id).await?;
        if job.job_type != JobType::GenerateIdeas {
            return Err(ApplicationError::InvalidJobType);
        }
        job.status.ensure_transition(JobStatus::Completed)?;
        if command.ideas.is_empty() {
            return Err(ApplicationError::validation("a generation must produce ideas"));
        }

        let now = self.clock.now();
        let ideas = command
            .ideas
            .into_iter()
            .map(|idea| {
                Ok(NewArticleIdea::new(
                    job.user_id,
                    job.id,
                    IdeaTitle::new(idea.title)?,
                    IdeaSummary::new(idea.summary)?,
                    now,
                ))
            })
            .collect::<ApplicationResult<Vec<_>>>()?;

        let stored = self.idea_write.insert_batch(ideas).await?;
        self.jobs
            .update_status(id, JobStatus::Completed, Progress::COMPLETE, now)
            .await?;
        info!(job_id = %id, ideas = stored.len(), "idea generation completed");
        Ok(stored.into_iter().map(Into::into).collect())
    }

    pub async fn complete_job(&self, job_id: &str) -> ApplicationResult<JobDto> {
        let id = JobId::parse(job_id)?;
        let job = self
            .jobs
            .update_status(id, JobStatus::Completed, Progress::COMPLETE, self.clock.now())
            .await?;
        info!(job_id = %id, "job completed");
        Ok(job.into())
    }

    pub async fn fail_job(&self, command: FailJobCommand) -> ApplicationResult<JobDto> {
        let id = JobId::parse(&command.job_id)?;
        let job = self
            .jobs
            .update_error(id, &command.error_message, self.clock.now())
            .await?;
        warn!(job_id = %id, error = %command.error_message, "job failed");
        Ok(job.into())
    }

    async fn load(&self, id: JobId) -> ApplicationResult<ArticleJob> {
        self.jobs.find(id).await?.ok_or(ApplicationError::JobNotFound)
    }
}
