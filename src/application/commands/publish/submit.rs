// src/application/commands/publish/submit.rs
use std::collections::HashSet;

use chrono::{DateTime, Utc};
use tracing::{error, info, warn};

use super::PublishCommandService;
use crate::{
    application::{
        dispatch::PublishArticleTask,
        dto::PublishArticlesDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        article::{ArticleId, ArticleStatusUpdate, ArticleTitle, NewArticle},
        idea::{ArticleIdea, Feedback, IdeaId},
        job::JobId,
        user::{UserId, UserUsageUpdate},
    },
};

pub const MAX_PUBLISH_BATCH: usize = 50;

/// Error recorded on an article whose task never reached the queue.
pub const ARTICLE_ENQUEUE_FAILED_MESSAGE: &str = "failed to enqueue for publishing";

pub struct PublishArticleItem {
    pub idea_id: String,
    pub feedback: Option<String>,
}

pub struct PublishArticlesCommand {
    pub articles: Vec<PublishArticleItem>,
}

/// What happened to one idea of a publish batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArticleOutcome {
    Enqueued(ArticleId),
    /// The article row exists and was marked `error`.
    EnqueueFailed(ArticleId),
    NotCreated,
}

struct Selection {
    id: IdeaId,
    feedback: Option<Feedback>,
}

impl PublishCommandService {
    /// Approves the selected ideas and starts one publish task per idea.
    ///
    /// Everything up to the creation of the job is all-or-nothing. From
    /// there on each idea is handled on its own: a failed article does not
    /// stop the rest of the batch.
    pub async fn publish_articles(
        &self,
        user_id: UserId,
        command: PublishArticlesCommand,
    ) -> ApplicationResult<PublishArticlesDto> {
        let selection = parse_selection(command.articles)?;
        let requested = u32::try_from(selection.len())
            .map_err(|_| ApplicationError::validation("too many articles"))?;

        let _guard = self.locks.acquire(user_id).await;

        let mut user = self
            .user_repo
            .find_by_id(user_id)
            .await?
            .ok_or(ApplicationError::UserNotFound)?;
        let plan = self
            .plan_repo
            .find_by_id(user.plan_id)
            .await?
            .ok_or(ApplicationError::PlanNotFound)?;

        if !user.can_publish(requested, &plan) {
            warn!(
                user_id = %user_id,
                used = user.articles_used,
                requested,
                limit = plan.max_articles,
                "article limit exceeded"
            );
            return Err(ApplicationError::QuotaExceeded {
                used: user.articles_used,
                requested,
                limit: plan.max_articles,
            });
        }

        let mut ideas = Vec::with_capacity(selection.len());
        for item in &selection {
            let idea = self
                .idea_read
                .find_by_id(item.id)
                .await?
                .ok_or_else(|| ApplicationError::IdeaNotFound(item.id.to_string()))?;
            if !idea.is_owned_by(user_id) {
                warn!(user_id = %user_id, idea_id = %item.id, "idea owned by another user");
                return Err(ApplicationError::AccessDenied);
            }
            ideas.push(idea);
        }

        let ids: Vec<IdeaId> = selection.iter().map(|item| item.id).collect();
        self.idea_write.approve_many(user_id, &ids).await?;
        if let Err(err) = self.idea_write.delete_unapproved_by_user_id(user_id).await {
            error!(user_id = %user_id, error = %err, "failed to purge unapproved ideas");
        }

        let job = self.dispatcher.open_publish_job(user_id, &ids).await?;

        let now = self.clock.now();
        let mut enqueued = 0_u32;
        for (idea, item) in ideas.iter().zip(selection) {
            let outcome = self.publish_one(user_id, job.id, idea, item.feedback, now).await;
            if matches!(outcome, ArticleOutcome::Enqueued(_)) {
                enqueued += 1;
            }
        }

        user.charge_articles(requested, now);
        if user.complete_onboarding(now) {
            info!(user_id = %user_id, "onboarding completed");
        }
        if let Err(err) = self.user_repo.update_usage(UserUsageUpdate::from(&user)).await {
            error!(user_id = %user_id, error = %err, "failed to persist article usage");
        }

        info!(
            user_id = %user_id,
            job_id = %job.id,
            requested,
            enqueued,
            "publish batch submitted"
        );

        Ok(PublishArticlesDto {
            job_id: job.id.to_string(),
            status: job.status.to_string(),
            articles_count: requested,
            articles_enqueued: enqueued,
        })
    }

    async fn publish_one(
        &self,
        user_id: UserId,
        job_id: JobId,
        idea: &ArticleIdea,
        feedback: Option<Feedback>,
        now: DateTime<Utc>,
    ) -> ArticleOutcome {
        let title = match ArticleTitle::new(idea.title.as_str()) {
            Ok(title) => title,
            Err(err) => {
                error!(idea_id = %idea.id, error = %err, "idea title rejected for article");
                return ArticleOutcome::NotCreated;
            }
        };

        let article = match self
            .article_write
            .insert(NewArticle::new(user_id, job_id, Some(idea.id), title, now))
            .await
        {
            Ok(article) => article,
            Err(err) => {
                error!(idea_id = %idea.id, error = %err, "failed to create article");
                return ArticleOutcome::NotCreated;
            }
        };

        let task = PublishArticleTask {
            article_id: article.id.into(),
            user_id: user_id.into(),
            idea_id: idea.id.into(),
            title: idea.title.to_string(),
            summary: idea.summary.as_str().to_owned(),
            feedback: feedback.map(Into::into),
        };

        match self.dispatcher.dispatch_article(&task).await {
            Ok(()) => ArticleOutcome::Enqueued(article.id),
            Err(err) => {
                error!(article_id = %article.id, error = %err, "failed to enqueue article");
                let mut failed = article.clone();
                let marked = match failed.mark_error(ARTICLE_ENQUEUE_FAILED_MESSAGE, now) {
                    Ok(()) => self
                        .article_write
                        .update_status(ArticleStatusUpdate::between(&article, &failed))
                        .await
                        .map(|_| ()),
                    Err(err) => Err(err),
                };
                if let Err(err) = marked {
                    error!(article_id = %article.id, error = %err, "failed to mark article as errored");
                }
                ArticleOutcome::EnqueueFailed(article.id)
            }
        }
    }
}

fn parse_selection(items: Vec<PublishArticleItem>) -> ApplicationResult<Vec<Selection>> {
    if items.is_empty() {
        return Err(ApplicationError::validation(
            "select at least one article to publish",
        ));
    }
    if items.len() > MAX_PUBLISH_BATCH {
        return Err(ApplicationError::validation(format!(
            "at most {MAX_PUBLISH_BATCH} articles can be published at once"
        )));
    }

    let mut seen = HashSet::with_capacity(items.len());
    items
        .into_iter()
        .map(|item| {
            let id = IdeaId::parse(&item.idea_id)?;
            if !seen.insert(id) {
                return Err(ApplicationError::validation(format!(
                    "idea {id} selected more than once"
                )));
            }
            let feedback = Feedback::parse(item.feedback.as_deref())?;
            Ok(Selection { id, feedback })
        })
        .collect()
}
