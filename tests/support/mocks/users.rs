// tests/support/mocks/users.rs
use async_trait::async_trait;
use postpilot_core::domain::business::{BusinessProfile, BusinessProfileRepository};
use postpilot_core::domain::errors::{DomainError, DomainResult};
use postpilot_core::domain::user::{
    Plan, PlanId, PlanRepository, User, UserId, UserRepository, UserUsageUpdate,
};
use std::collections::HashMap;
use std::sync::Mutex;

#[derive(Default)]
pub struct InMemoryUsers {
    inner: Mutex<HashMap<UserId, User>>,
}

impl InMemoryUsers {
    pub fn put(&self, user: User) {
        self.inner.lock().unwrap().insert(user.id, user);
    }

    pub fn get(&self, id: UserId) -> User {
        self.inner.lock().unwrap().get(&id).cloned().unwrap()
    }
}

#[async_trait]
impl UserRepository for InMemoryUsers {
    async fn find_by_id(&self, id: UserId) -> DomainResult<Option<User>> {
        Ok(self.inner.lock().unwrap().get(&id).cloned())
    }

    async fn update_usage(&self, update: UserUsageUpdate) -> DomainResult<User> {
        let mut map = self.inner.lock().unwrap();
        let user = map
            .get_mut(&update.id)
            .ok_or_else(|| DomainError::NotFound("user not found".into()))?;
        user.articles_used = update.articles_used;
        user.onboarding_step = update.onboarding_step;
        user.has_completed_onboarding = update.has_completed_onboarding;
        user.updated_at = update.updated_at;
        Ok(user.clone())
    }
}

#[derive(Default)]
pub struct InMemoryPlans {
    inner: Mutex<HashMap<PlanId, Plan>>,
}

impl InMemoryPlans {
    pub fn put(&self, plan: Plan) {
        self.inner.lock().unwrap().insert(plan.id, plan);
    }
}

#[async_trait]
impl PlanRepository for InMemoryPlans {
    async fn find_by_id(&self, id: PlanId) -> DomainResult<Option<Plan>> {
        Ok(self.inner.lock().unwrap().get(&id).cloned())
    }
}

#[derive(Default)]
pub struct InMemoryProfiles {
    profiles: Mutex<HashMap<UserId, BusinessProfile>>,
    competitors: Mutex<HashMap<UserId, Vec<String>>>,
}

impl InMemoryProfiles {
    pub fn put(&self, profile: BusinessProfile) {
        self.profiles
            .lock()
            .unwrap()
            .insert(profile.user_id, profile);
    }

    pub fn remove(&self, user_id: UserId) {
        self.profiles.lock().unwrap().remove(&user_id);
    }

    pub fn put_competitors(&self, user_id: UserId, urls: Vec<String>) {
        self.competitors.lock().unwrap().insert(user_id, urls);
    }
}

#[async_trait]
impl BusinessProfileRepository for InMemoryProfiles {
    async fn find_profile_by_user_id(
        &self,
        user_id: UserId,
    ) -> DomainResult<Option<BusinessProfile>> {
        Ok(self.profiles.lock().unwrap().get(&user_id).cloned())
    }

    async fn find_competitors_by_user_id(&self, user_id: UserId) -> DomainResult<Vec<String>> {
        Ok(self
            .competitors
            .lock()
            .unwrap()
            .get(&user_id)
            .cloned()
            .unwrap_or_default())
    }
}
