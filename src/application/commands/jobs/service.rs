// src/application/commands/jobs/service.rs
use std::sync::Arc;

use crate::{
    application::ports::time::Clock,
    domain::{
        article::{ArticleReadRepository, ArticleWriteRepository},
        idea::IdeaWriteRepository,
        job::JobStore,
    },
};

/// Write side used by the external worker to report on jobs and articles.
pub struct JobProgressService {
    pub(super) jobs: Arc<JobStore>,
    pub(super) idea_write: Arc<dyn IdeaWriteRepository>,
    pub(super) article_read: Arc<dyn ArticleReadRepository>,
    pub(super) article_write: Arc<dyn ArticleWriteRepository>,
    pub(super) clock: Arc<dyn Clock>,
}

impl JobProgressService {
    pub fn new(
        jobs: Arc<JobStore>,
        idea_write: Arc<dyn IdeaWriteRepository>,
        article_read: Arc<dyn ArticleReadRepository>,
        article_write: Arc<dyn ArticleWriteRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            jobs,
            idea_write,
            article_read,
            article_write,
            clock,
        }
    }
}
