use std::sync::Arc;

use crate::{
    application::ports::time::Clock,
    domain::{
        article::ArticleReadRepository,
        idea::IdeaReadRepository,
        job::ArticleJobRepository,
        quota::QuotaEngine,
        user::{PlanRepository, UserRepository},
    },
};

/// Read side of the wizard: status projections, idea listing and quota.
pub struct WizardQueryService {
    pub(super) user_repo: Arc<dyn UserRepository>,
    pub(super) plan_repo: Arc<dyn PlanRepository>,
    pub(super) job_repo: Arc<dyn ArticleJobRepository>,
    pub(super) idea_read: Arc<dyn IdeaReadRepository>,
    pub(super) article_read: Arc<dyn ArticleReadRepository>,
    pub(super) quota: Arc<QuotaEngine>,
    pub(super) clock: Arc<dyn Clock>,
}

impl WizardQueryService {
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        plan_repo: Arc<dyn PlanRepository>,
        job_repo: Arc<dyn ArticleJobRepository>,
        idea_read: Arc<dyn IdeaReadRepository>,
        article_read: Arc<dyn ArticleReadRepository>,
        quota: Arc<QuotaEngine>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            user_repo,
            plan_repo,
            job_repo,
            idea_read,
            article_read,
            quota,
            clock,
        }
    }
}
