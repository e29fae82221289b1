// src/domain/business/entity.rs
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::user::UserId;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use uuid::Uuid;

const MAX_DESCRIPTION_CHARS: usize = 500;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Objective {
    Leads,
    Sales,
    Branding,
}

impl Objective {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Leads => "leads",
            Self::Sales => "sales",
            Self::Branding => "branding",
        }
    }
}

impl fmt::Display for Objective {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Objective {
    type Err = DomainError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "leads" => Ok(Self::Leads),
            "sales" => Ok(Self::Sales),
            "branding" => Ok(Self::Branding),
            other => Err(DomainError::Validation(format!("unknown objective: {other}"))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BusinessUnit {
    pub id: Uuid,
    #[serde(default)]
    pub name: String,
    pub country: String,
    pub state: String,
    pub city: String,
    #[serde(default)]
    pub is_primary: bool,
}

impl BusinessUnit {
    fn validate(&self) -> DomainResult<()> {
        if self.id.is_nil() {
            return Err(incomplete("business unit id is invalid"));
        }
        if self.country.is_empty() {
            return Err(incomplete("select the country of this unit"));
        }
        if self.state.is_empty() {
            return Err(incomplete("select the state of this unit"));
        }
        if self.city.is_empty() {
            return Err(incomplete("select the city of this unit"));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    pub country: String,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub has_multiple_units: bool,
    #[serde(default)]
    pub units: Vec<BusinessUnit>,
}

impl Location {
    pub fn validate(&self) -> DomainResult<()> {
        if self.country.is_empty() {
            return Err(incomplete("select the country where the business operates"));
        }

        if self.has_multiple_units {
            if self.units.is_empty() {
                return Err(incomplete(
                    "multiple units selected but no unit was added",
                ));
            }
            for unit in &self.units {
                unit.validate()?;
            }
            if self.units.iter().filter(|unit| unit.is_primary).count() > 1 {
                return Err(incomplete("only one unit can be marked as primary"));
            }
            return Ok(());
        }

        // Country only is a digital business; state and city come as a pair.
        match (self.state.is_empty(), self.city.is_empty()) {
            (true, false) => Err(incomplete("a city requires its state")),
            (false, true) => Err(incomplete("a state requires its city")),
            _ => Ok(()),
        }
    }
}

#[derive(Debug, Clone)]
pub struct BusinessProfile {
    pub id: Uuid,
    pub user_id: UserId,
    pub description: String,
    pub primary_objective: Objective,
    pub secondary_objective: Option<Objective>,
    pub location: Location,
    pub site_url: Option<String>,
    pub has_blog: bool,
    pub blog_urls: Vec<String>,
}

impl BusinessProfile {
    /// Checks the profile is complete enough to brief the idea generator.
    pub fn validate(&self) -> DomainResult<()> {
        if self.id.is_nil() {
            return Err(incomplete("business profile id is invalid"));
        }

        let description_len = self.description.trim().chars().count();
        if description_len == 0 || description_len > MAX_DESCRIPTION_CHARS {
            return Err(incomplete(
                "the business description must have between 1 and 500 characters",
            ));
        }

        self.location.validate()?;

        if self.site_url.as_deref().is_some_and(str::is_empty) {
            return Err(incomplete("the site URL cannot be empty"));
        }

        if self.has_blog && self.blog_urls.is_empty() {
            return Err(incomplete("a blog was declared, add at least one blog URL"));
        }

        Ok(())
    }
}

fn incomplete(message: &str) -> DomainError {
    DomainError::Validation(message.into())
}
