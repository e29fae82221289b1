use super::WizardQueryService;
use crate::{
    application::{
        dto::{IdeaDto, RegenerationQuotaDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::user::UserId,
};

impl WizardQueryService {
    pub async fn list_ideas(&self, user_id: UserId) -> ApplicationResult<Vec<IdeaDto>> {
        let ideas = self.idea_read.find_by_user_id(user_id).await?;
        Ok(ideas.into_iter().map(Into::into).collect())
    }

    /// Current regeneration allowance. Reading it has no side effects.
    pub async fn get_regeneration_quota(
        &self,
        user_id: UserId,
    ) -> ApplicationResult<RegenerationQuotaDto> {
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
        let quota = self.quota.quota_for(user_id, &plan, self.clock.now()).await?;

        Ok(RegenerationQuotaDto {
            remaining: quota.remaining(),
            limit: quota.limit,
            events_in_window: quota.events_in_window,
        })
    }
}
