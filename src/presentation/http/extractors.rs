// src/presentation/http/extractors.rs
use crate::{
    application::error::ApplicationError, domain::user::UserId,
    presentation::http::state::HttpState,
};
use axum::{Extension, extract::FromRequestParts, http::request::Parts};

use super::error::HttpError;

/// Header set by the upstream gateway once it has authenticated the caller.
pub const USER_ID_HEADER: &str = "x-user-id";
pub const WORKER_TOKEN_HEADER: &str = "x-worker-token";

/// The requesting user.
#[derive(Debug, Clone, Copy)]
pub struct CurrentUser(pub UserId);

impl<S: Send + Sync> FromRequestParts<S> for CurrentUser {
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let raw = parts
            .headers
            .get(USER_ID_HEADER)
            .ok_or_else(|| unauthorized("missing x-user-id header"))?
            .to_str()
            .map_err(|_| unauthorized("invalid x-user-id header"))?;

        let user_id = UserId::parse(raw).map_err(|_| unauthorized("invalid x-user-id header"))?;
        Ok(Self(user_id))
    }
}

/// Caller presented the worker token.
#[derive(Debug, Clone, Copy)]
pub struct WorkerAuth;

impl<S: Send + Sync> FromRequestParts<S> for WorkerAuth {
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Extension(app_state) = Extension::<HttpState>::from_request_parts(parts, state)
            .await
            .map_err(|_| {
                HttpError::from_error(ApplicationError::infrastructure(
                    "application state missing",
                ))
            })?;

        let expected = app_state
            .worker_token
            .ok_or_else(|| unauthorized("worker callbacks are disabled"))?;
        let presented = parts
            .headers
            .get(WORKER_TOKEN_HEADER)
            .and_then(|value| value.to_str().ok())
            .ok_or_else(|| unauthorized("missing worker token"))?;

        if presented.as_bytes() == expected.as_bytes() {
            Ok(Self)
        } else {
            Err(unauthorized("invalid worker token"))
        }
    }
}

fn unauthorized(message: &str) -> HttpError {
    HttpError::from_error(ApplicationError::unauthorized(message))
}
