// src/infrastructure/repositories/users/postgres.rs
use crate::infrastructure::repositories::error::{map_sqlx, to_i32, to_u32};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::user::{
    OnboardingStep, Plan, PlanId, PlanRepository, User, UserId, UserRepository, UserUsageUpdate,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

const USER_COLUMNS: &str =
    "id, plan_id, articles_used, onboarding_step, has_completed_onboarding, updated_at";

#[derive(Clone)]
pub struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Clone)]
pub struct PostgresPlanRepository {
    pool: PgPool,
}

impl PostgresPlanRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct UserRow {
    id: Uuid,
    plan_id: Uuid,
    articles_used: i32,
    onboarding_step: i16,
    has_completed_onboarding: bool,
    updated_at: DateTime<Utc>,
}

impl TryFrom<UserRow> for User {
    type Error = DomainError;

    fn try_from(row: UserRow) -> Result<Self, Self::Error> {
        let step = u8::try_from(row.onboarding_step).map_err(|_| {
            DomainError::Persistence(format!("invalid onboarding step: {}", row.onboarding_step))
        })?;
        Ok(Self {
            id: UserId::new(row.id)?,
            plan_id: PlanId::new(row.plan_id)?,
            articles_used: to_u32(row.articles_used, "articles_used")?,
            onboarding_step: OnboardingStep::new(step)?,
            has_completed_onboarding: row.has_completed_onboarding,
            updated_at: row.updated_at,
        })
    }
}

#[derive(Debug, FromRow)]
struct PlanRow {
    id: Uuid,
    name: String,
    max_articles: i32,
    max_idea_regenerations_per_hour: i32,
}

impl TryFrom<PlanRow> for Plan {
    type Error = DomainError;

    fn try_from(row: PlanRow) -> Result<Self, Self::Error> {
        Self::new(
            PlanId::new(row.id)?,
            row.name,
            to_u32(row.max_articles, "max_articles")?,
            to_u32(
                row.max_idea_regenerations_per_hour,
                "max_idea_regenerations_per_hour",
            )?,
        )
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn find_by_id(&self, id: UserId) -> DomainResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE id = $1"
        ))
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(User::try_from).transpose()
    }

    async fn update_usage(&self, update: UserUsageUpdate) -> DomainResult<User> {
        let UserUsageUpdate {
            id,
            articles_used,
            onboarding_step,
            has_completed_onboarding,
            updated_at,
        } = update;

        let row = sqlx::query_as::<_, UserRow>(&format!(
            "UPDATE users
             SET articles_used = $2, onboarding_step = $3, has_completed_onboarding = $4, updated_at = $5
             WHERE id = $1
             RETURNING {USER_COLUMNS}"
        ))
        .bind(id.as_uuid())
        .bind(to_i32(articles_used, "articles_used")?)
        .bind(i16::from(onboarding_step))
        .bind(has_completed_onboarding)
        .bind(updated_at)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?
        .ok_or_else(|| DomainError::NotFound("user not found".into()))?;

        User::try_from(row)
    }
}

#[async_trait]
impl PlanRepository for PostgresPlanRepository {
    async fn find_by_id(&self, id: PlanId) -> DomainResult<Option<Plan>> {
        let row = sqlx::query_as::<_, PlanRow>(
            "SELECT id, name, max_articles, max_idea_regenerations_per_hour FROM plans WHERE id = $1",
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Plan::try_from).transpose()
    }
}
