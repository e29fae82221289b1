// src/domain/job/value_objects.rs
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::identifier::uuid_identifier;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

uuid_identifier!(JobId, "job");

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JobType {
    GenerateIdeas,
    Publish,
}

impl JobType {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::GenerateIdeas => "generate_ideas",
            Self::Publish => "publish",
        }
    }
}

impl fmt::Display for JobType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for JobType {
    type Err = DomainError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "generate_ideas" => Ok(Self::GenerateIdeas),
            "publish" => Ok(Self::Publish),
            other => Err(DomainError::Validation(format!("unknown job type: {other}"))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobStatus {
    Queued,
    Processing,
    Completed,
    Failed,
}

impl JobStatus {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Queued => "queued",
            Self::Processing => "processing",
            Self::Completed => "completed",
            Self::Failed => "failed",
        }
    }

    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Completed | Self::Failed)
    }

    /// Queued -> Processing -> {Completed, Failed}. A queued job may also
    /// fail directly when it never reached a worker. Processing -> Processing
    /// is a progress report.
    pub const fn can_transition_to(self, next: Self) -> bool {
        matches!(
            (self, next),
            (Self::Queued, Self::Processing | Self::Failed)
                | (Self::Processing, Self::Processing | Self::Completed | Self::Failed)
        )
    }

    pub fn ensure_transition(self, next: Self) -> DomainResult<()> {
        if self.can_transition_to(next) {
            Ok(())
        } else {
            Err(DomainError::IllegalTransition {
                from: self.as_str().into(),
                to: next.as_str().into(),
            })
        }
    }
}

impl fmt::Display for JobStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for JobStatus {
    type Err = DomainError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "queued" => Ok(Self::Queued),
            "processing" => Ok(Self::Processing),
            "completed" => Ok(Self::Completed),
            "failed" => Ok(Self::Failed),
            other => Err(DomainError::Validation(format!("unknown job status: {other}"))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Progress(u8);

impl Progress {
    pub const COMPLETE: Self = Self(100);

    pub fn new(value: i64) -> DomainResult<Self> {
        u8::try_from(value)
            .ok()
            .filter(|v| *v <= 100)
            .map(Self)
            .ok_or_else(|| DomainError::Validation("progress must be between 0 and 100".into()))
    }

    pub const fn value(self) -> u8 {
        self.0
    }
}

impl From<Progress> for i16 {
    fn from(value: Progress) -> Self {
        Self::from(value.0)
    }
}
