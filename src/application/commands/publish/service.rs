// src/application/commands/publish/service.rs
use std::sync::Arc;

use crate::{
    application::{dispatch::JobDispatcher, locks::UserLocks, ports::time::Clock},
    domain::{
        article::ArticleWriteRepository,
        idea::{IdeaReadRepository, IdeaWriteRepository},
        user::{PlanRepository, UserRepository},
    },
};

pub struct PublishCommandService {
    pub(super) user_repo: Arc<dyn UserRepository>,
    pub(super) plan_repo: Arc<dyn PlanRepository>,
    pub(super) idea_read: Arc<dyn IdeaReadRepository>,
    pub(super) idea_write: Arc<dyn IdeaWriteRepository>,
    pub(super) article_write: Arc<dyn ArticleWriteRepository>,
    pub(super) dispatcher: Arc<JobDispatcher>,
    pub(super) locks: Arc<UserLocks>,
    pub(super) clock: Arc<dyn Clock>,
}

impl PublishCommandService {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        plan_repo: Arc<dyn PlanRepository>,
        idea_read: Arc<dyn IdeaReadRepository>,
        idea_write: Arc<dyn IdeaWriteRepository>,
        article_write: Arc<dyn ArticleWriteRepository>,
        dispatcher: Arc<JobDispatcher>,
        locks: Arc<UserLocks>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            user_repo,
            plan_repo,
            idea_read,
            idea_write,
            article_write,
            dispatcher,
            locks,
            clock,
        }
    }
}
