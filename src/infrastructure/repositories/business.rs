// src/infrastructure/repositories/business.rs
use super::map_sqlx;
use crate::domain::business::{BusinessProfile, BusinessProfileRepository, Location, Objective};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::user::UserId;
use async_trait::async_trait;
use sqlx::types::Json;
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

#[derive(Clone)]
pub struct PostgresBusinessProfileRepository {
    pool: PgPool,
}

impl PostgresBusinessProfileRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ProfileRow {
    id: Uuid,
    user_id: Uuid,
    description: String,
    primary_objective: String,
    secondary_objective: Option<String>,
    location: Json<Location>,
    site_url: Option<String>,
    has_blog: bool,
    blog_urls: Vec<String>,
}

impl TryFrom<ProfileRow> for BusinessProfile {
    type Error = DomainError;

    fn try_from(row: ProfileRow) -> Result<Self, Self::Error> {
        Ok(Self {
            id: row.id,
            user_id: UserId::new(row.user_id)?,
            description: row.description,
            primary_objective: row.primary_objective.parse::<Objective>()?,
            secondary_objective: row
                .secondary_objective
                .filter(|value| !value.is_empty())
                .map(|value| value.parse::<Objective>())
                .transpose()?,
            location: row.location.0,
            site_url: row.site_url,
            has_blog: row.has_blog,
            blog_urls: row.blog_urls,
        })
    }
}

#[async_trait]
impl BusinessProfileRepository for PostgresBusinessProfileRepository {
    async fn find_profile_by_user_id(
        &self,
        user_id: UserId,
    ) -> DomainResult<Option<BusinessProfile>> {
        let row = sqlx::query_as::<_, ProfileRow>(
            "SELECT id, user_id, description, primary_objective, secondary_objective, location,
                    site_url, has_blog, blog_urls
             FROM business_profiles WHERE user_id = $1",
        )
        .bind(user_id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(BusinessProfile::try_from).transpose()
    }

    async fn find_competitors_by_user_id(&self, user_id: UserId) -> DomainResult<Vec<String>> {
        sqlx::query_scalar::<_, String>(
            "SELECT website_url FROM competitors WHERE user_id = $1 ORDER BY created_at, id",
        )
        .bind(user_id.as_uuid())
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)
    }
}
