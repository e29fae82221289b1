use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::identifier::uuid_identifier;
use std::fmt;

uuid_identifier!(IdeaId, "idea");

const MAX_TITLE_CHARS: usize = 500;
const MAX_SUMMARY_CHARS: usize = 2000;
const MAX_FEEDBACK_CHARS: usize = 1000;

fn bounded(value: String, field: &str, max: usize) -> DomainResult<String> {
    let len = value.trim().chars().count();
    if len == 0 {
        return Err(DomainError::Validation(format!("{field} cannot be empty")));
    }
    if value.chars().count() > max {
        return Err(DomainError::Validation(format!(
            "{field} must be at most {max} characters"
        )));
    }
    Ok(value)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdeaTitle(String);

impl IdeaTitle {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        bounded(value.into(), "idea title", MAX_TITLE_CHARS).map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for IdeaTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<IdeaTitle> for String {
    fn from(value: IdeaTitle) -> Self {
        value.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdeaSummary(String);

impl IdeaSummary {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        bounded(value.into(), "idea summary", MAX_SUMMARY_CHARS).map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<IdeaSummary> for String {
    fn from(value: IdeaSummary) -> Self {
        value.0
    }
}

/// Free-text guidance a user attaches to an idea before it is written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feedback(String);

impl Feedback {
    /// Blank input means "no feedback" and yields `None`.
    pub fn parse(value: Option<&str>) -> DomainResult<Option<Self>> {
        match value.map(str::trim) {
            None | Some("") => Ok(None),
            Some(text) if text.chars().count() > MAX_FEEDBACK_CHARS => Err(
                DomainError::Validation("feedback must be at most 1000 characters".into()),
            ),
            Some(text) => Ok(Some(Self(text.to_owned()))),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<Feedback> for String {
    fn from(value: Feedback) -> Self {
        value.0
    }
}
