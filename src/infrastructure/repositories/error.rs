use crate::domain::errors::DomainError;

const CNT_IDEA_JOB: &str = "article_ideas_job_id_fkey";
const CNT_JOB_PROGRESS: &str = "article_jobs_progress_chk";
const CNT_USER_ONBOARDING_STEP: &str = "users_onboarding_step_chk";

pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => {
            if let Some(constraint) = db_err.constraint() {
                return match constraint {
                    CNT_IDEA_JOB => DomainError::NotFound("generation job not found".into()),
                    CNT_JOB_PROGRESS => {
                        DomainError::Validation("progress must be between 0 and 100".into())
                    }
                    CNT_USER_ONBOARDING_STEP => {
                        DomainError::Validation("onboarding step must be between 0 and 5".into())
                    }
                    other => {
                        DomainError::Persistence(format!("database constraint violation: {other}"))
                    }
                };
            }

            if let Some(code) = db_err.code() {
                match code.as_ref() {
                    "23505" => {
                        return DomainError::Conflict("unique constraint violated".into());
                    }
                    "23503" => {
                        return DomainError::NotFound("referenced record not found".into());
                    }
                    "23514" => {
                        return DomainError::Validation("check constraint violated".into());
                    }
                    _ => {}
                }
            }

            DomainError::Persistence(db_err.message().to_string())
        }
        _ => DomainError::Persistence(err.to_string()),
    }
}

/// Converts a stored counter into the domain's unsigned form.
pub fn to_u32(value: i32, field: &str) -> Result<u32, DomainError> {
    u32::try_from(value)
        .map_err(|_| DomainError::Persistence(format!("negative {field} in storage: {value}")))
}

pub fn to_i32(value: u32, field: &str) -> Result<i32, DomainError> {
    i32::try_from(value)
        .map_err(|_| DomainError::Validation(format!("{field} too large: {value}")))
}
