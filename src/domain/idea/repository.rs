use crate::domain::errors::DomainResult;
use crate::domain::idea::entity::{ArticleIdea, NewArticleIdea};
use crate::domain::idea::value_objects::{Feedback, IdeaId};
use crate::domain::job::JobId;
use crate::domain::user::UserId;
use async_trait::async_trait;

#[async_trait]
pub trait IdeaWriteRepository: Send + Sync {
    async fn insert_batch(&self, ideas: Vec<NewArticleIdea>) -> DomainResult<Vec<ArticleIdea>>;

    /// Flips `approved` on the given ideas of `user_id`. Returns how many rows changed.
    async fn approve_many(&self, user_id: UserId, ids: &[IdeaId]) -> DomainResult<u64>;

    /// Removes every unapproved idea of the user. Approved ideas are untouched.
    async fn delete_unapproved_by_user_id(&self, user_id: UserId) -> DomainResult<u64>;

    async fn set_feedback(
        &self,
        id: IdeaId,
        feedback: Option<Feedback>,
    ) -> DomainResult<ArticleIdea>;
}

#[async_trait]
pub trait IdeaReadRepository: Send + Sync {
    async fn find_by_id(&self, id: IdeaId) -> DomainResult<Option<ArticleIdea>>;
    async fn find_by_job_id(&self, job_id: JobId) -> DomainResult<Vec<ArticleIdea>>;
    async fn find_by_user_id(&self, user_id: UserId) -> DomainResult<Vec<ArticleIdea>>;
    async fn count_approved_by_user_id(&self, user_id: UserId) -> DomainResult<u64>;
}
