// src/infrastructure/repositories/articles.rs
use super::map_sqlx;
use crate::domain::article::{
    Article, ArticleId, ArticleReadRepository, ArticleStatus, ArticleStatusUpdate, ArticleTitle,
    ArticleWriteRepository, NewArticle,
};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::idea::IdeaId;
use crate::domain::job::JobId;
use crate::domain::user::UserId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

const ARTICLE_COLUMNS: &str =
    "id, user_id, job_id, idea_id, title, status, post_url, error_message, created_at, updated_at";

#[derive(Clone)]
pub struct PostgresArticleWriteRepository {
    pool: PgPool,
}

impl PostgresArticleWriteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Clone)]
pub struct PostgresArticleReadRepository {
    pool: PgPool,
}

impl PostgresArticleReadRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ArticleRow {
    id: Uuid,
    user_id: Uuid,
    job_id: Uuid,
    idea_id: Option<Uuid>,
    title: String,
    status: String,
    post_url: Option<String>,
    error_message: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<ArticleRow> for Article {
    type Error = DomainError;

    fn try_from(row: ArticleRow) -> Result<Self, Self::Error> {
        Ok(Self {
            id: ArticleId::new(row.id)?,
            user_id: UserId::new(row.user_id)?,
            job_id: JobId::new(row.job_id)?,
            idea_id: row.idea_id.map(IdeaId::new).transpose()?,
            title: ArticleTitle::new(row.title)?,
            status: row.status.parse::<ArticleStatus>()?,
            post_url: row.post_url,
            error_message: row.error_message,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[async_trait]
impl ArticleWriteRepository for PostgresArticleWriteRepository {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article> {
        let article = article.into_article();
        let row = sqlx::query_as::<_, ArticleRow>(&format!(
            "INSERT INTO articles ({ARTICLE_COLUMNS})
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
             RETURNING {ARTICLE_COLUMNS}"
        ))
        .bind(article.id.as_uuid())
        .bind(article.user_id.as_uuid())
        .bind(article.job_id.as_uuid())
        .bind(article.idea_id.map(|id| id.as_uuid()))
        .bind(article.title.as_str())
        .bind(article.status.as_str())
        .bind(article.post_url.as_deref())
        .bind(article.error_message.as_deref())
        .bind(article.created_at)
        .bind(article.updated_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Article::try_from(row)
    }

    async fn update_status(&self, update: ArticleStatusUpdate) -> DomainResult<Article> {
        let ArticleStatusUpdate {
            id,
            expected_status,
            original_updated_at,
            status,
            post_url,
            error_message,
            updated_at,
        } = update;

        let maybe_row = sqlx::query_as::<_, ArticleRow>(&format!(
            "UPDATE articles
             SET status = $4, post_url = $5, error_message = $6, updated_at = $7
             WHERE id = $1 AND status = $2 AND updated_at = $3
             RETURNING {ARTICLE_COLUMNS}"
        ))
        .bind(id.as_uuid())
        .bind(expected_status.as_str())
        .bind(original_updated_at)
        .bind(status.as_str())
        .bind(post_url.as_deref())
        .bind(error_message.as_deref())
        .bind(updated_at)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        let row = maybe_row.ok_or_else(|| {
            DomainError::Conflict("article changed concurrently, please retry".into())
        })?;
        Article::try_from(row)
    }
}

#[async_trait]
impl ArticleReadRepository for PostgresArticleReadRepository {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>> {
        let row = sqlx::query_as::<_, ArticleRow>(&format!(
            "SELECT {ARTICLE_COLUMNS} FROM articles WHERE id = $1"
        ))
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Article::try_from).transpose()
    }

    async fn find_by_job_id(&self, job_id: JobId) -> DomainResult<Vec<Article>> {
        let rows = sqlx::query_as::<_, ArticleRow>(&format!(
            "SELECT {ARTICLE_COLUMNS} FROM articles
             WHERE job_id = $1 ORDER BY created_at, id"
        ))
        .bind(job_id.as_uuid())
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(Article::try_from).collect()
    }
}
