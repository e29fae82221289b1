use crate::domain::business::entity::BusinessProfile;
use crate::domain::errors::DomainResult;
use crate::domain::user::UserId;
use async_trait::async_trait;

#[async_trait]
pub trait BusinessProfileRepository: Send + Sync {
    async fn find_profile_by_user_id(&self, user_id: UserId)
    -> DomainResult<Option<BusinessProfile>>;

    async fn find_competitors_by_user_id(&self, user_id: UserId) -> DomainResult<Vec<String>>;
}
