// src/application/commands/ideas/service.rs
use std::sync::Arc;

use crate::{
    application::{dispatch::JobDispatcher, locks::UserLocks, ports::time::Clock},
    domain::{
        business::BusinessProfileRepository,
        idea::{IdeaReadRepository, IdeaWriteRepository},
        quota::QuotaEngine,
        user::{PlanRepository, UserRepository},
    },
};

pub struct IdeaCommandService {
    pub(super) user_repo: Arc<dyn UserRepository>,
    pub(super) plan_repo: Arc<dyn PlanRepository>,
    pub(super) profile_repo: Arc<dyn BusinessProfileRepository>,
    pub(super) idea_read: Arc<dyn IdeaReadRepository>,
    pub(super) idea_write: Arc<dyn IdeaWriteRepository>,
    pub(super) quota: Arc<QuotaEngine>,
    pub(super) dispatcher: Arc<JobDispatcher>,
    pub(super) locks: Arc<UserLocks>,
    pub(super) clock: Arc<dyn Clock>,
}

impl IdeaCommandService {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        plan_repo: Arc<dyn PlanRepository>,
        profile_repo: Arc<dyn BusinessProfileRepository>,
        idea_read: Arc<dyn IdeaReadRepository>,
        idea_write: Arc<dyn IdeaWriteRepository>,
        quota: Arc<QuotaEngine>,
        dispatcher: Arc<JobDispatcher>,
        locks: Arc<UserLocks>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            user_repo,
            plan_repo,
            profile_repo,
            idea_read,
            idea_write,
            quota,
            dispatcher,
            locks,
            clock,
        }
    }
}
