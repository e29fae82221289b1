// tests/support/mocks/articles.rs
use async_trait::async_trait;
use postpilot_core::domain::article::{
    Article, ArticleId, ArticleReadRepository, ArticleStatusUpdate, ArticleWriteRepository,
    NewArticle,
};
use postpilot_core::domain::errors::{DomainError, DomainResult};
use postpilot_core::domain::job::JobId;
use postpilot_core::domain::user::UserId;
use std::sync::Mutex;

/// Articles in insertion order.
#[derive(Default)]
pub struct InMemoryArticles {
    inner: Mutex<Vec<Article>>,
}

impl InMemoryArticles {
    pub fn for_user(&self, user_id: UserId) -> Vec<Article> {
        self.inner
            .lock()
            .unwrap()
            .iter()
            .filter(|article| article.user_id == user_id)
            .cloned()
            .collect()
    }

    pub fn count(&self) -> usize {
        self.inner.lock().unwrap().len()
    }
}

#[async_trait]
impl ArticleWriteRepository for InMemoryArticles {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article> {
        let article = article.into_article();
        self.inner.lock().unwrap().push(article.clone());
        Ok(article)
    }

    async fn update_status(&self, update: ArticleStatusUpdate) -> DomainResult<Article> {
        let mut articles = self.inner.lock().unwrap();
        let stored = articles
            .iter_mut()
            .find(|article| article.id == update.id)
            .ok_or_else(|| DomainError::NotFound("article not found".into()))?;
        if !update.matches(stored) {
            return Err(DomainError::Conflict(
                "article was modified concurrently".into(),
            ));
        }
        stored.status = update.status;
        stored.post_url = update.post_url;
        stored.error_message = update.error_message;
        stored.updated_at = update.updated_at;
        Ok(stored.clone())
    }
}

#[async_trait]
impl ArticleReadRepository for InMemoryArticles {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>> {
        Ok(self
            .inner
            .lock()
            .unwrap()
            .iter()
            .find(|article| article.id == id)
            .cloned())
    }

    async fn find_by_job_id(&self, job_id: JobId) -> DomainResult<Vec<Article>> {
        Ok(self
            .inner
            .lock()
            .unwrap()
            .iter()
            .filter(|article| article.job_id == job_id)
            .cloned()
            .collect())
    }
}
