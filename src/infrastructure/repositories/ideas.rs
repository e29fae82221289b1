// src/infrastructure/repositories/ideas.rs
use super::map_sqlx;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::idea::{
    ArticleIdea, Feedback, IdeaId, IdeaReadRepository, IdeaSummary, IdeaTitle,
    IdeaWriteRepository, NewArticleIdea,
};
use crate::domain::job::JobId;
use crate::domain::user::UserId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};
use uuid::Uuid;

const IDEA_COLUMNS: &str = "id, user_id, job_id, title, summary, approved, feedback, generated_at";

#[derive(Clone)]
pub struct PostgresIdeaWriteRepository {
    pool: PgPool,
}

impl PostgresIdeaWriteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Clone)]
pub struct PostgresIdeaReadRepository {
    pool: PgPool,
}

impl PostgresIdeaReadRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct IdeaRow {
    id: Uuid,
    user_id: Uuid,
    job_id: Uuid,
    title: String,
    summary: String,
    approved: bool,
    feedback: Option<String>,
    generated_at: DateTime<Utc>,
}

impl TryFrom<IdeaRow> for ArticleIdea {
    type Error = DomainError;

    fn try_from(row: IdeaRow) -> Result<Self, Self::Error> {
        Ok(Self {
            id: IdeaId::new(row.id)?,
            user_id: UserId::new(row.user_id)?,
            job_id: JobId::new(row.job_id)?,
            title: IdeaTitle::new(row.title)?,
            summary: IdeaSummary::new(row.summary)?,
            approved: row.approved,
            feedback: Feedback::parse(row.feedback.as_deref())?,
            generated_at: row.generated_at,
        })
    }
}

fn rows_to_ideas(rows: Vec<IdeaRow>) -> DomainResult<Vec<ArticleIdea>> {
    rows.into_iter().map(ArticleIdea::try_from).collect()
}

fn to_count(value: i64) -> DomainResult<u64> {
    u64::try_from(value).map_err(|_| DomainError::Persistence(format!("negative count: {value}")))
}

#[async_trait]
impl IdeaWriteRepository for PostgresIdeaWriteRepository {
    async fn insert_batch(&self, ideas: Vec<NewArticleIdea>) -> DomainResult<Vec<ArticleIdea>> {
        if ideas.is_empty() {
            return Ok(Vec::new());
        }

        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new(
            "INSERT INTO article_ideas (id, user_id, job_id, title, summary, approved, generated_at) ",
        );
        builder.push_values(ideas, |mut row, idea| {
            row.push_bind(idea.id.as_uuid())
                .push_bind(idea.user_id.as_uuid())
                .push_bind(idea.job_id.as_uuid())
                .push_bind(String::from(idea.title))
                .push_bind(String::from(idea.summary))
                .push_bind(false)
                .push_bind(idea.generated_at);
        });
        builder.push(" RETURNING ");
        builder.push(IDEA_COLUMNS);

        let rows = builder
            .build_query_as::<IdeaRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;
        rows_to_ideas(rows)
    }

    async fn approve_many(&self, user_id: UserId, ids: &[IdeaId]) -> DomainResult<u64> {
        let ids: Vec<Uuid> = ids.iter().map(IdeaId::as_uuid).collect();
        let result = sqlx::query(
            "UPDATE article_ideas SET approved = TRUE WHERE user_id = $1 AND id = ANY($2)",
        )
        .bind(user_id.as_uuid())
        .bind(&ids)
        .execute(&self.pool)
        .await
        .map_err(map_sqlx)?;
        Ok(result.rows_affected())
    }

    async fn delete_unapproved_by_user_id(&self, user_id: UserId) -> DomainResult<u64> {
        let result =
            sqlx::query("DELETE FROM article_ideas WHERE user_id = $1 AND approved = FALSE")
                .bind(user_id.as_uuid())
                .execute(&self.pool)
                .await
                .map_err(map_sqlx)?;
        Ok(result.rows_affected())
    }

    async fn set_feedback(
        &self,
        id: IdeaId,
        feedback: Option<Feedback>,
    ) -> DomainResult<ArticleIdea> {
        let row = sqlx::query_as::<_, IdeaRow>(&format!(
            "UPDATE article_ideas SET feedback = $2 WHERE id = $1 RETURNING {IDEA_COLUMNS}"
        ))
        .bind(id.as_uuid())
        .bind(feedback.map(String::from))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?
        .ok_or_else(|| DomainError::NotFound("idea not found".into()))?;

        ArticleIdea::try_from(row)
    }
}

#[async_trait]
impl IdeaReadRepository for PostgresIdeaReadRepository {
    async fn find_by_id(&self, id: IdeaId) -> DomainResult<Option<ArticleIdea>> {
        let row = sqlx::query_as::<_, IdeaRow>(&format!(
            "SELECT {IDEA_COLUMNS} FROM article_ideas WHERE id = $1"
        ))
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(ArticleIdea::try_from).transpose()
    }

    async fn find_by_job_id(&self, job_id: JobId) -> DomainResult<Vec<ArticleIdea>> {
        let rows = sqlx::query_as::<_, IdeaRow>(&format!(
            "SELECT {IDEA_COLUMNS} FROM article_ideas WHERE job_id = $1 ORDER BY generated_at, id"
        ))
        .bind(job_id.as_uuid())
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;
        rows_to_ideas(rows)
    }

    async fn find_by_user_id(&self, user_id: UserId) -> DomainResult<Vec<ArticleIdea>> {
        let rows = sqlx::query_as::<_, IdeaRow>(&format!(
            "SELECT {IDEA_COLUMNS} FROM article_ideas
             WHERE user_id = $1 ORDER BY approved DESC, generated_at DESC, id"
        ))
        .bind(user_id.as_uuid())
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;
        rows_to_ideas(rows)
    }

    async fn count_approved_by_user_id(&self, user_id: UserId) -> DomainResult<u64> {
        let count = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(1) FROM article_ideas WHERE user_id = $1 AND approved = TRUE",
        )
        .bind(user_id.as_uuid())
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;
        to_count(count)
    }
}
