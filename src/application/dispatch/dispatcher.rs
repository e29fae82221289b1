// src/application/dispatch/dispatcher.rs
use std::sync::Arc;

use serde::Serialize;
use tracing::{error, info, warn};

use super::messages::{GenerateIdeasTask, PublishArticleTask, PublishJobStarted};
use crate::application::{
    error::{ApplicationError, ApplicationResult},
    ports::{queue::TaskQueue, time::Clock},
};
use crate::domain::idea::IdeaId;
use crate::domain::job::{
    ArticleJob, ENQUEUE_FAILED_MESSAGE, GenerateIdeasPayload, JobPayload, JobStore, NewArticleJob,
    PublishPayload,
};
use crate::domain::user::UserId;

#[derive(Debug, Clone)]
pub struct QueueNames {
    pub ideas: String,
    pub publish: String,
}

impl Default for QueueNames {
    fn default() -> Self {
        Self {
            ideas: "article-generation-queue".into(),
            publish: "article-publish-queue".into(),
        }
    }
}

/// Creates jobs and hands their tasks to the queue.
///
/// The job row is written first and the message sent second. When the send
/// fails the job is moved to `failed` so no queued job is left without a
/// worker.
pub struct JobDispatcher {
    jobs: Arc<JobStore>,
    queue: Arc<dyn TaskQueue>,
    clock: Arc<dyn Clock>,
    queues: QueueNames,
}

impl JobDispatcher {
    pub fn new(
        jobs: Arc<JobStore>,
        queue: Arc<dyn TaskQueue>,
        clock: Arc<dyn Clock>,
        queues: QueueNames,
    ) -> Self {
        Self {
            jobs,
            queue,
            clock,
            queues,
        }
    }

    pub async fn dispatch_idea_generation(
        &self,
        user_id: UserId,
        payload: GenerateIdeasPayload,
    ) -> ApplicationResult<ArticleJob> {
        let new_job = NewArticleJob::new(
            user_id,
            JobPayload::GenerateIdeas(payload.clone()),
            self.clock.now(),
        );
        let task = GenerateIdeasTask {
            job_id: new_job.id.into(),
            user_id: user_id.into(),
            kind: GenerateIdeasTask::KIND,
            payload,
        };

        let job = self.jobs.create(new_job).await?;
        if let Err(err) = self.send(&self.queues.ideas, &task).await {
            return Err(self.fail_undelivered(&job, &err).await);
        }
        info!(job_id = %job.id, user_id = %user_id, "idea generation task enqueued");
        Ok(job)
    }

    /// Persists a publish job and announces it. The announcement is best
    /// effort: per-article tasks carry the actual work.
    pub async fn open_publish_job(
        &self,
        user_id: UserId,
        idea_ids: &[IdeaId],
    ) -> ApplicationResult<ArticleJob> {
        let payload = PublishPayload::new(idea_ids);
        let articles_count = payload.articles_count;
        let job = self
            .jobs
            .create(NewArticleJob::new(
                user_id,
                JobPayload::Publish(payload),
                self.clock.now(),
            ))
            .await?;

        let notice = PublishJobStarted {
            job_id: job.id.into(),
            user_id: user_id.into(),
            kind: PublishJobStarted::KIND,
            articles_count,
        };
        if let Err(err) = self.send(&self.queues.publish, &notice).await {
            warn!(job_id = %job.id, error = %err, "publish job notification not delivered");
        }
        Ok(job)
    }

    pub async fn dispatch_article(&self, task: &PublishArticleTask) -> ApplicationResult<()> {
        self.send(&self.queues.publish, task).await
    }

    async fn send<M: Serialize + Sync>(&self, queue_name: &str, message: &M) -> ApplicationResult<()> {
        let body = serde_json::to_vec(message).map_err(|err| {
            ApplicationError::infrastructure(format!("failed to encode task message: {err}"))
        })?;
        self.queue.send_message(queue_name, &body).await
    }

    async fn fail_undelivered(&self, job: &ArticleJob, cause: &ApplicationError) -> ApplicationError {
        error!(job_id = %job.id, error = %cause, "task could not be enqueued");
        if let Err(err) = self
            .jobs
            .update_error(job.id, ENQUEUE_FAILED_MESSAGE, self.clock.now())
            .await
        {
            error!(job_id = %job.id, error = %err, "failed to mark undelivered job as failed");
        }
        ApplicationError::EnqueueFailed {
            job_id: job.id.to_string(),
        }
    }
}
