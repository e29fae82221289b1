use crate::domain::errors::DomainResult;
use crate::domain::user::{
    entity::{Plan, User, UserUsageUpdate},
    value_objects::{PlanId, UserId},
};
use async_trait::async_trait;

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn find_by_id(&self, id: UserId) -> DomainResult<Option<User>>;

    async fn update_usage(&self, update: UserUsageUpdate) -> DomainResult<User>;
}

#[async_trait]
pub trait PlanRepository: Send + Sync {
    async fn find_by_id(&self, id: PlanId) -> DomainResult<Option<Plan>>;
}
