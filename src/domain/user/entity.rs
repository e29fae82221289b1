// src/domain/user/entity.rs
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::user::value_objects::{OnboardingStep, PlanId, UserId};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct User {
    pub id: UserId,
    pub plan_id: PlanId,
    pub articles_used: u32,
    pub onboarding_step: OnboardingStep,
    pub has_completed_onboarding: bool,
    pub updated_at: DateTime<Utc>,
}

impl User {
    pub fn can_publish(&self, count: u32, plan: &Plan) -> bool {
        self.articles_used
            .checked_add(count)
            .is_some_and(|total| total <= plan.max_articles)
    }

    /// Charges `count` articles against the plan. Callers check
    /// [`User::can_publish`] first; the counter itself only saturates.
    pub fn charge_articles(&mut self, count: u32, now: DateTime<Utc>) {
        self.articles_used = self.articles_used.saturating_add(count);
        self.updated_at = now;
    }

    /// Marks the wizard finished. Returns `false` when it already was.
    pub fn complete_onboarding(&mut self, now: DateTime<Utc>) -> bool {
        if self.has_completed_onboarding {
            return false;
        }
        self.has_completed_onboarding = true;
        self.onboarding_step = self.onboarding_step.advance_to(OnboardingStep::last());
        self.updated_at = now;
        true
    }
}

#[derive(Debug, Clone)]
pub struct Plan {
    pub id: PlanId,
    pub name: String,
    pub max_articles: u32,
    pub max_idea_regenerations_per_hour: u32,
}

impl Plan {
    pub fn new(
        id: PlanId,
        name: impl Into<String>,
        max_articles: u32,
        max_idea_regenerations_per_hour: u32,
    ) -> DomainResult<Self> {
        let name = name.into();
        if name.trim().is_empty() || name.chars().count() > 50 {
            return Err(DomainError::Validation(
                "plan name must be between 1 and 50 characters".into(),
            ));
        }
        Ok(Self {
            id,
            name,
            max_articles,
            max_idea_regenerations_per_hour,
        })
    }
}

/// Persisted slice of a user that this engine is allowed to write.
#[derive(Debug, Clone)]
pub struct UserUsageUpdate {
    pub id: UserId,
    pub articles_used: u32,
    pub onboarding_step: OnboardingStep,
    pub has_completed_onboarding: bool,
    pub updated_at: DateTime<Utc>,
}

impl From<&User> for UserUsageUpdate {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            articles_used: user.articles_used,
            onboarding_step: user.onboarding_step,
            has_completed_onboarding: user.has_completed_onboarding,
            updated_at: user.updated_at,
        }
    }
}
