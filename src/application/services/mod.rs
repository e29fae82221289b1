// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        commands::{
            ideas::IdeaCommandService, jobs::JobProgressService, publish::PublishCommandService,
        },
        dispatch::{JobDispatcher, QueueNames},
        locks::UserLocks,
        ports::{queue::TaskQueue, time::Clock},
        queries::wizard::WizardQueryService,
    },
    domain::{
        article::{ArticleReadRepository, ArticleWriteRepository},
        business::BusinessProfileRepository,
        idea::{IdeaReadRepository, IdeaWriteRepository},
        job::{ArticleJobRepository, JobStore},
        quota::QuotaEngine,
        user::{PlanRepository, UserRepository},
    },
};

/// Storage adapters the engine runs on.
#[derive(Clone)]
pub struct Repositories {
    pub users: Arc<dyn UserRepository>,
    pub plans: Arc<dyn PlanRepository>,
    pub profiles: Arc<dyn BusinessProfileRepository>,
    pub jobs: Arc<dyn ArticleJobRepository>,
    pub idea_read: Arc<dyn IdeaReadRepository>,
    pub idea_write: Arc<dyn IdeaWriteRepository>,
    pub article_read: Arc<dyn ArticleReadRepository>,
    pub article_write: Arc<dyn ArticleWriteRepository>,
}

pub struct ApplicationServices {
    pub idea_commands: Arc<IdeaCommandService>,
    pub publish_commands: Arc<PublishCommandService>,
    pub job_progress: Arc<JobProgressService>,
    pub wizard_queries: Arc<WizardQueryService>,
}

impl ApplicationServices {
    pub fn new(
        repos: Repositories,
        queue: Arc<dyn TaskQueue>,
        clock: Arc<dyn Clock>,
        queues: QueueNames,
    ) -> Self {
        let job_store = Arc::new(JobStore::new(Arc::clone(&repos.jobs)));
        let quota = Arc::new(QuotaEngine::new(Arc::clone(&repos.jobs)));
        let dispatcher = Arc::new(JobDispatcher::new(
            Arc::clone(&job_store),
            queue,
            Arc::clone(&clock),
            queues,
        ));
        let locks = Arc::new(UserLocks::new());

        let idea_commands = Arc::new(IdeaCommandService::new(
            Arc::clone(&repos.users),
            Arc::clone(&repos.plans),
            Arc::clone(&repos.profiles),
            Arc::clone(&repos.idea_read),
            Arc::clone(&repos.idea_write),
            Arc::clone(&quota),
            Arc::clone(&dispatcher),
            Arc::clone(&locks),
            Arc::clone(&clock),
        ));

        let publish_commands = Arc::new(PublishCommandService::new(
            Arc::clone(&repos.users),
            Arc::clone(&repos.plans),
            Arc::clone(&repos.idea_read),
            Arc::clone(&repos.idea_write),
            Arc::clone(&repos.article_write),
            Arc::clone(&dispatcher),
            locks,
            Arc::clone(&clock),
        ));

        let job_progress = Arc::new(JobProgressService::new(
            job_store,
            Arc::clone(&repos.idea_write),
            Arc::clone(&repos.article_read),
            Arc::clone(&repos.article_write),
            Arc::clone(&clock),
        ));

        let wizard_queries = Arc::new(WizardQueryService::new(
            repos.users,
            repos.plans,
            repos.jobs,
            repos.idea_read,
            repos.article_read,
            quota,
            clock,
        ));

        Self {
            idea_commands,
            publish_commands,
            job_progress,
            wizard_queries,
        }
    }
}
