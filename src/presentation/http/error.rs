use crate::application::{ApplicationResult, error::ApplicationError};
use crate::domain::errors::DomainError;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::SecondsFormat;
use serde::Serialize;
use serde_json::{Value, json};
use tracing::error;

#[derive(Debug)]
pub struct HttpError {
    status: StatusCode,
    message: String,
    details: Option<Value>,
}

impl HttpError {
    pub fn from_error(err: ApplicationError) -> Self {
        let message = err.to_string();
        match err {
            ApplicationError::Domain(domain_err) => Self::from_domain(domain_err),
            ApplicationError::UserNotFound => {
                Self::coded(StatusCode::NOT_FOUND, message, "user_not_found")
            }
            ApplicationError::PlanNotFound => {
                Self::coded(StatusCode::NOT_FOUND, message, "plan_not_found")
            }
            ApplicationError::RegenerationLimitExceeded {
                remaining,
                limit,
                next_eligible_at,
            } => Self::new(StatusCode::TOO_MANY_REQUESTS, message).with_details(json!({
                "code": "regeneration_limit_exceeded",
                "remaining": remaining,
                "limit": limit,
                "next_eligible_at": next_eligible_at.to_rfc3339_opts(SecondsFormat::Secs, true),
            })),
            ApplicationError::AllIdeasAlreadyApproved => {
                Self::coded(StatusCode::CONFLICT, message, "all_ideas_approved")
            }
            ApplicationError::BusinessProfileMissing => {
                Self::coded(StatusCode::BAD_REQUEST, message, "business_profile_missing")
            }
            ApplicationError::BusinessProfileIncomplete(_) => Self::coded(
                StatusCode::BAD_REQUEST,
                message,
                "business_profile_incomplete",
            ),
            ApplicationError::QuotaExceeded {
                used,
                requested,
                limit,
            } => Self::new(StatusCode::FORBIDDEN, message).with_details(json!({
                "code": "article_limit_exceeded",
                "used": used,
                "requested": requested,
                "limit": limit,
                "remaining": limit.saturating_sub(used),
            })),
            ApplicationError::IdeaNotFound(_) => {
                Self::coded(StatusCode::NOT_FOUND, message, "idea_not_found")
            }
            ApplicationError::AccessDenied => {
                Self::coded(StatusCode::FORBIDDEN, message, "access_denied")
            }
            ApplicationError::InvalidJobType => {
                Self::coded(StatusCode::BAD_REQUEST, message, "invalid_job_type")
            }
            ApplicationError::JobNotFound => {
                Self::coded(StatusCode::NOT_FOUND, message, "job_not_found")
            }
            ApplicationError::EnqueueFailed { job_id } => {
                Self::new(StatusCode::SERVICE_UNAVAILABLE, message).with_details(json!({
                    "code": "enqueue_failed",
                    "job_id": job_id,
                }))
            }
            ApplicationError::Validation(msg) => Self::new(StatusCode::BAD_REQUEST, msg),
            ApplicationError::NotFound(msg) => Self::new(StatusCode::NOT_FOUND, msg),
            ApplicationError::Unauthorized(msg) => Self::new(StatusCode::UNAUTHORIZED, msg),
            ApplicationError::Infrastructure(msg) => {
                error!(error = %msg, "infrastructure failure");
                Self::new(StatusCode::INTERNAL_SERVER_ERROR, msg)
            }
        }
    }

    fn from_domain(err: DomainError) -> Self {
        let message = err.to_string();
        match err {
            DomainError::Validation(_) => Self::new(StatusCode::BAD_REQUEST, message),
            DomainError::NotFound(_) => Self::new(StatusCode::NOT_FOUND, message),
            DomainError::Conflict(_) => Self::new(StatusCode::CONFLICT, message),
            DomainError::IllegalTransition { .. } => {
                Self::coded(StatusCode::CONFLICT, message, "illegal_transition")
            }
            DomainError::Persistence(_) => {
                error!(error = %message, "persistence failure");
                Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
            }
        }
    }

    pub const fn status(&self) -> StatusCode {
        self.status
    }

    const fn new(status: StatusCode, message: String) -> Self {
        Self {
            status,
            message,
            details: None,
        }
    }

    fn coded(status: StatusCode, message: String, code: &str) -> Self {
        Self::new(status, message).with_details(json!({ "code": code }))
    }

    fn with_details(mut self, details: Value) -> Self {
        self.details = Some(details);
        self
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let payload = ErrorBody {
            error: self
                .status
                .canonical_reason()
                .unwrap_or("error")
                .to_string(),
            message: self.message,
            details: self.details,
        };
        (self.status, Json(payload)).into_response()
    }
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<Value>,
}

pub type HttpResult<T> = Result<T, HttpError>;

pub trait IntoHttpResult<T> {
    fn into_http(self) -> HttpResult<T>;
}

impl<T> IntoHttpResult<T> for ApplicationResult<T> {
    fn into_http(self) -> HttpResult<T> {
        self.map_err(HttpError::from_error)
    }
}
