// src/application/error.rs
use crate::domain::errors::DomainError;
use chrono::{DateTime, Utc};
use thiserror::Error;

pub type ApplicationResult<T> = Result<T, ApplicationError>;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("user not found")]
    UserNotFound,

    #[error("plan not found")]
    PlanNotFound,

    #[error("hourly regeneration limit reached ({limit} per hour)")]
    RegenerationLimitExceeded {
        remaining: u32,
        limit: u32,
        next_eligible_at: DateTime<Utc>,
    },

    #[error("all ideas are already approved")]
    AllIdeasAlreadyApproved,

    #[error("business profile not found")]
    BusinessProfileMissing,

    #[error("business profile incomplete: {0}")]
    BusinessProfileIncomplete(String),

    #[error("article limit exceeded: {used} used, {requested} requested, {limit} allowed")]
    QuotaExceeded { used: u32, requested: u32, limit: u32 },

    #[error("idea not found: {0}")]
    IdeaNotFound(String),

    #[error("access denied")]
    AccessDenied,

    #[error("invalid job type")]
    InvalidJobType,

    #[error("job not found")]
    JobNotFound,

    #[error("failed to enqueue job {job_id} for processing")]
    EnqueueFailed { job_id: String },

    #[error("validation error: {0}")]
    Validation(String),

    #[error("resource not found: {0}")]
    NotFound(String),

    #[error("unauthorized: {0}")]
    Unauthorized(String),

    #[error("infrastructure failure: {0}")]
    Infrastructure(String),
}

impl ApplicationError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn unauthorized(msg: impl Into<String>) -> Self {
        Self::Unauthorized(msg.into())
    }

    pub fn infrastructure(msg: impl Into<String>) -> Self {
        Self::Infrastructure(msg.into())
    }
}
