// src/domain/user/value_objects.rs
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::identifier::uuid_identifier;
use std::fmt;

uuid_identifier!(UserId, "user");
uuid_identifier!(PlanId, "plan");

pub const FINAL_ONBOARDING_STEP: u8 = 5;

/// Wizard progress, 0 through 5. Only ever moves forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct OnboardingStep(u8);

impl OnboardingStep {
    pub fn new(step: u8) -> DomainResult<Self> {
        if step > FINAL_ONBOARDING_STEP {
            return Err(DomainError::Validation(format!(
                "onboarding step must be between 0 and {FINAL_ONBOARDING_STEP}"
            )));
        }
        Ok(Self(step))
    }

    pub const fn last() -> Self {
        Self(FINAL_ONBOARDING_STEP)
    }

    pub const fn value(self) -> u8 {
        self.0
    }

    /// Returns the later of the two steps.
    #[must_use]
    pub fn advance_to(self, target: Self) -> Self {
        self.max(target)
    }
}

impl fmt::Display for OnboardingStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<OnboardingStep> for i16 {
    fn from(value: OnboardingStep) -> Self {
        Self::from(value.0)
    }
}
