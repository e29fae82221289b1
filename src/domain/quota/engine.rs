use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::domain::errors::DomainResult;
use crate::domain::job::ArticleJobRepository;
use crate::domain::quota::window::{RegenerationQuota, WINDOW};
use crate::domain::user::{Plan, UserId};

/// Counts generation events in the trailing window straight from the job table.
///
/// An event is one generation job, no matter how many ideas it produced or
/// whether those ideas still exist. Jobs whose task never reached the queue
/// are not events.
pub struct QuotaEngine {
    jobs: Arc<dyn ArticleJobRepository>,
}

impl QuotaEngine {
    pub fn new(jobs: Arc<dyn ArticleJobRepository>) -> Self {
        Self { jobs }
    }

    pub async fn count_generation_events_in_last_hour(
        &self,
        user_id: UserId,
        now: DateTime<Utc>,
    ) -> DomainResult<u32> {
        let events = self
            .jobs
            .generation_job_ids_since(user_id, now - WINDOW)
            .await?;
        Ok(u32::try_from(events.len()).unwrap_or(u32::MAX))
    }

    pub async fn quota_for(
        &self,
        user_id: UserId,
        plan: &Plan,
        now: DateTime<Utc>,
    ) -> DomainResult<RegenerationQuota> {
        let events = self.count_generation_events_in_last_hour(user_id, now).await?;
        Ok(RegenerationQuota::new(
            plan.max_idea_regenerations_per_hour,
            events,
        ))
    }
}
