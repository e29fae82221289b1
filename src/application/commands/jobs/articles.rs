use tracing::{info, warn};

use super::JobProgressService;
use crate::{
    application::{
        dto::ArticleDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        article::{Article, ArticleId, ArticleStatusUpdate},
        errors::DomainResult,
    },
};

impl JobProgressService {
    pub async fn record_article_publishing(&self, article_id: &str) -> ApplicationResult<ArticleDto> {
        let now = self.clock.now();
        self.transition_article(article_id, |article| article.mark_publishing(now))
            .await
    }

    pub async fn record_article_published(
        &self,
        article_id: &str,
        post_url: &str,
    ) -> ApplicationResult<ArticleDto> {
        let now = self.clock.now();
        let article = self
            .transition_article(article_id, |article| article.mark_published(post_url, now))
            .await?;
        info!(article_id = %article.id, post_url, "article published");
        Ok(article)
    }

    pub async fn record_article_failed(
        &self,
        article_id: &str,
        error_message: &str,
    ) -> ApplicationResult<ArticleDto> {
        if error_message.trim().is_empty() {
            return Err(ApplicationError::validation("error message cannot be empty"));
        }
        let now = self.clock.now();
        let article = self
            .transition_article(article_id, |article| article.mark_error(error_message, now))
            .await?;
        warn!(article_id = %article.id, error = error_message, "article failed");
        Ok(article)
    }

    async fn transition_article<F>(&self, article_id: &str, apply: F) -> ApplicationResult<ArticleDto>
    where
        F: FnOnce(&mut Article) -> DomainResult<()> + Send,
    {
        let id = ArticleId::parse(article_id)?;
        let before = self
            .article_read
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("article not found"))?;
        let mut after = before.clone();
        apply(&mut after)?;
        let stored = self
            .article_write
            .update_status(ArticleStatusUpdate::between(&before, &after))
            .await?;
        Ok(stored.into())
    }
}
