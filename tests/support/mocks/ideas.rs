// tests/support/mocks/ideas.rs
use async_trait::async_trait;
use postpilot_core::domain::errors::{DomainError, DomainResult};
use postpilot_core::domain::idea::{
    ArticleIdea, Feedback, IdeaId, IdeaReadRepository, IdeaWriteRepository, NewArticleIdea,
};
use postpilot_core::domain::job::JobId;
use postpilot_core::domain::user::UserId;
use std::collections::BTreeSet;
use std::sync::Mutex;

#[derive(Default)]
pub struct InMemoryIdeas {
    inner: Mutex<Vec<ArticleIdea>>,
}

impl InMemoryIdeas {
    pub fn put(&self, idea: ArticleIdea) {
        self.inner.lock().unwrap().push(idea);
    }

    pub fn for_user(&self, user_id: UserId) -> Vec<ArticleIdea> {
        self.inner
            .lock()
            .unwrap()
            .iter()
            .filter(|idea| idea.user_id == user_id)
            .cloned()
            .collect()
    }

    pub fn ids_for_user(&self, user_id: UserId) -> BTreeSet<IdeaId> {
        self.for_user(user_id).iter().map(|idea| idea.id).collect()
    }
}

#[async_trait]
impl IdeaWriteRepository for InMemoryIdeas {
    async fn insert_batch(&self, ideas: Vec<NewArticleIdea>) -> DomainResult<Vec<ArticleIdea>> {
        let stored: Vec<ArticleIdea> = ideas.into_iter().map(NewArticleIdea::into_idea).collect();
        self.inner.lock().unwrap().extend(stored.iter().cloned());
        Ok(stored)
    }

    async fn approve_many(&self, user_id: UserId, ids: &[IdeaId]) -> DomainResult<u64> {
        let mut changed = 0;
        for idea in self.inner.lock().unwrap().iter_mut() {
            if idea.user_id == user_id && ids.contains(&idea.id) {
                idea.approved = true;
                changed += 1;
            }
        }
        Ok(changed)
    }

    async fn delete_unapproved_by_user_id(&self, user_id: UserId) -> DomainResult<u64> {
        let mut ideas = self.inner.lock().unwrap();
        let before = ideas.len();
        ideas.retain(|idea| idea.user_id != user_id || idea.approved);
        Ok((before - ideas.len()) as u64)
    }

    async fn set_feedback(
        &self,
        id: IdeaId,
        feedback: Option<Feedback>,
    ) -> DomainResult<ArticleIdea> {
        let mut ideas = self.inner.lock().unwrap();
        let idea = ideas
            .iter_mut()
            .find(|idea| idea.id == id)
            .ok_or_else(|| DomainError::NotFound("idea not found".into()))?;
        idea.feedback = feedback;
        Ok(idea.clone())
    }
}

#[async_trait]
impl IdeaReadRepository for InMemoryIdeas {
    async fn find_by_id(&self, id: IdeaId) -> DomainResult<Option<ArticleIdea>> {
        Ok(self
            .inner
            .lock()
            .unwrap()
            .iter()
            .find(|idea| idea.id == id)
            .cloned())
    }

    async fn find_by_job_id(&self, job_id: JobId) -> DomainResult<Vec<ArticleIdea>> {
        Ok(self
            .inner
            .lock()
            .unwrap()
            .iter()
            .filter(|idea| idea.job_id == job_id)
            .cloned()
            .collect())
    }

    async fn find_by_user_id(&self, user_id: UserId) -> DomainResult<Vec<ArticleIdea>> {
        let mut ideas = self.for_user(user_id);
        ideas.sort_by_key(|idea| idea.generated_at);
        Ok(ideas)
    }

    async fn count_approved_by_user_id(&self, user_id: UserId) -> DomainResult<u64> {
        Ok(self
            .for_user(user_id)
            .iter()
            .filter(|idea| idea.approved)
            .count() as u64)
    }
}
