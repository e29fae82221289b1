use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::identifier::uuid_identifier;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

uuid_identifier!(ArticleId, "article");

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleTitle(String);

impl ArticleTitle {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::Validation("title cannot be empty".into()));
        }
        if value.chars().count() > 500 {
            return Err(DomainError::Validation(
                "title must be at most 500 characters".into(),
            ));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ArticleTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<ArticleTitle> for String {
    fn from(value: ArticleTitle) -> Self {
        value.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArticleStatus {
    Generating,
    Publishing,
    Published,
    Error,
}

impl ArticleStatus {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Generating => "generating",
            Self::Publishing => "publishing",
            Self::Published => "published",
            Self::Error => "error",
        }
    }

    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Published | Self::Error)
    }

    pub const fn can_transition_to(self, next: Self) -> bool {
        matches!(
            (self, next),
            (Self::Generating, Self::Publishing | Self::Published | Self::Error)
                | (Self::Publishing, Self::Published | Self::Error)
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

impl fmt::Display for ArticleStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ArticleStatus {
    type Err = DomainError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "generating" => Ok(Self::Generating),
            "publishing" => Ok(Self::Publishing),
            "published" => Ok(Self::Published),
            "error" => Ok(Self::Error),
            other => Err(DomainError::Validation(format!(
                "unknown article status: {other}"
            ))),
        }
    }
}
