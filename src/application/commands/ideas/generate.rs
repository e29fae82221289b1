// src/application/commands/ideas/generate.rs
use chrono::{DateTime, Utc};
use tracing::{info, warn};

use super::IdeaCommandService;
use crate::{
    application::{
        dto::GenerateIdeasDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        business::BusinessProfile,
        errors::DomainError,
        job::GenerateIdeasPayload,
        quota::{RegenerationQuota, TARGET_IDEA_COUNT},
        user::UserId,
    },
};

#[derive(Debug, Clone, Copy, Default)]
pub struct GenerateIdeasCommand {
    pub is_regeneration: bool,
}

impl IdeaCommandService {
    /// Starts a first generation or a regeneration of the user's ideas.
    ///
    /// Preconditions are checked in order and the first failure wins; no
    /// write happens before all of them pass.
    pub async fn generate_ideas(
        &self,
        user_id: UserId,
        command: GenerateIdeasCommand,
    ) -> ApplicationResult<GenerateIdeasDto> {
        let _guard = self.locks.acquire(user_id).await;
        let now = self.clock.now();

        let user = self
            .user_repo
            .find_by_id(user_id)
            .await?
            .ok_or(ApplicationError::UserNotFound)?;
        let plan = self
            .plan_repo
            .find_by_id(user.plan_id)
            .await?
            .ok_or(ApplicationError::PlanNotFound)?;
        let quota = self.quota.quota_for(user_id, &plan, now).await?;

        let article_count = if command.is_regeneration {
            self.check_regeneration(user_id, quota, now).await?
        } else {
            TARGET_IDEA_COUNT
        };

        let profile = self.load_complete_profile(user_id).await?;
        let competitors = self.profile_repo.find_competitors_by_user_id(user_id).await?;

        if command.is_regeneration {
            let removed = self.idea_write.delete_unapproved_by_user_id(user_id).await?;
            info!(user_id = %user_id, removed, "unapproved ideas purged for regeneration");
        }

        let payload = GenerateIdeasPayload {
            business_profile: (&profile).into(),
            competitors,
            article_count,
        };
        let job = self
            .dispatcher
            .dispatch_idea_generation(user_id, payload)
            .await?;

        info!(
            user_id = %user_id,
            job_id = %job.id,
            article_count,
            regeneration = command.is_regeneration,
            "idea generation requested"
        );

        Ok(GenerateIdeasDto {
            job_id: job.id.to_string(),
            status: job.status.to_string(),
            regenerations_remaining: quota.remaining_after_dispatch(),
            regenerations_limit: quota.limit,
        })
    }

    /// Returns how many new ideas the regeneration should ask for.
    async fn check_regeneration(
        &self,
        user_id: UserId,
        quota: RegenerationQuota,
        now: DateTime<Utc>,
    ) -> ApplicationResult<u32> {
        if !quota.permits_regeneration() {
            warn!(
                user_id = %user_id,
                events = quota.events_in_window,
                limit = quota.limit,
                "regeneration limit reached"
            );
            return Err(ApplicationError::RegenerationLimitExceeded {
                remaining: quota.remaining(),
                limit: quota.limit,
                next_eligible_at: RegenerationQuota::next_eligible_at(now),
            });
        }

        let approved = self.idea_read.count_approved_by_user_id(user_id).await?;
        let approved = u32::try_from(approved).unwrap_or(u32::MAX);
        if approved >= TARGET_IDEA_COUNT {
            warn!(user_id = %user_id, approved, "regeneration with every idea approved");
            return Err(ApplicationError::AllIdeasAlreadyApproved);
        }
        Ok(TARGET_IDEA_COUNT - approved)
    }

    async fn load_complete_profile(&self, user_id: UserId) -> ApplicationResult<BusinessProfile> {
        let profile = self
            .profile_repo
            .find_profile_by_user_id(user_id)
            .await?
            .ok_or(ApplicationError::BusinessProfileMissing)?;

        match profile.validate() {
            Ok(()) => Ok(profile),
            Err(DomainError::Validation(reason)) => {
                warn!(user_id = %user_id, reason = %reason, "business profile incomplete");
                Err(ApplicationError::BusinessProfileIncomplete(reason))
            }
            Err(other) => Err(other.into()),
        }
    }
}
