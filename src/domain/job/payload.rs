// src/domain/job/payload.rs
use crate::domain::business::{BusinessProfile, Location, Objective};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::idea::IdeaId;
use crate::domain::job::value_objects::JobType;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

/// Business profile fields handed to the idea generator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BusinessProfileSnapshot {
    pub description: String,
    pub primary_objective: Objective,
    pub location: Location,
    #[serde(rename = "siteURL")]
    pub site_url: Option<String>,
    pub has_blog: bool,
    #[serde(rename = "blogURLs")]
    pub blog_urls: Vec<String>,
}

impl From<&BusinessProfile> for BusinessProfileSnapshot {
    fn from(profile: &BusinessProfile) -> Self {
        Self {
            description: profile.description.clone(),
            primary_objective: profile.primary_objective,
            location: profile.location.clone(),
            site_url: profile.site_url.clone(),
            has_blog: profile.has_blog,
            blog_urls: profile.blog_urls.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateIdeasPayload {
    pub business_profile: BusinessProfileSnapshot,
    pub competitors: Vec<String>,
    pub article_count: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublishPayload {
    pub articles_count: u32,
    #[serde(rename = "ideaIDs")]
    idea_ids: Vec<Uuid>,
}

impl PublishPayload {
    pub fn new(idea_ids: &[IdeaId]) -> Self {
        Self {
            articles_count: u32::try_from(idea_ids.len()).unwrap_or(u32::MAX),
            idea_ids: idea_ids.iter().copied().map(Uuid::from).collect(),
        }
    }

    pub fn idea_ids(&self) -> DomainResult<Vec<IdeaId>> {
        self.idea_ids.iter().copied().map(IdeaId::new).collect()
    }
}

/// Task parameters stored with a job. The variant always matches the job type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JobPayload {
    GenerateIdeas(GenerateIdeasPayload),
    Publish(PublishPayload),
}

impl JobPayload {
    pub const fn job_type(&self) -> JobType {
        match self {
            Self::GenerateIdeas(_) => JobType::GenerateIdeas,
            Self::Publish(_) => JobType::Publish,
        }
    }

    pub fn to_json(&self) -> DomainResult<Value> {
        let value = match self {
            Self::GenerateIdeas(payload) => serde_json::to_value(payload),
            Self::Publish(payload) => serde_json::to_value(payload),
        };
        value.map_err(|err| DomainError::Validation(format!("unserialisable job payload: {err}")))
    }

    pub fn from_json(job_type: JobType, value: Value) -> DomainResult<Self> {
        let decoded = match job_type {
            JobType::GenerateIdeas => serde_json::from_value(value).map(Self::GenerateIdeas),
            JobType::Publish => serde_json::from_value(value).map(Self::Publish),
        };
        decoded.map_err(|err| {
            DomainError::Persistence(format!("malformed {job_type} job payload: {err}"))
        })
    }

    pub const fn as_publish(&self) -> Option<&PublishPayload> {
        match self {
            Self::Publish(payload) => Some(payload),
            Self::GenerateIdeas(_) => None,
        }
    }

    pub const fn as_generate_ideas(&self) -> Option<&GenerateIdeasPayload> {
        match self {
            Self::GenerateIdeas(payload) => Some(payload),
            Self::Publish(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generate_payload_uses_worker_field_names() {
        let payload = GenerateIdeasPayload {
            business_profile: BusinessProfileSnapshot {
                description: "Bike repair shop".into(),
                primary_objective: Objective::Sales,
                location: Location {
                    country: "PT".into(),
                    ..Location::default()
                },
                site_url: None,
                has_blog: true,
                blog_urls: vec!["https://bikes.example/blog".into()],
            },
            competitors: vec!["https://rival.example".into()],
            article_count: 3,
        };

        let json = JobPayload::GenerateIdeas(payload).to_json().unwrap();
        assert_eq!(json["articleCount"], 3);
        assert_eq!(json["businessProfile"]["primaryObjective"], "sales");
        assert_eq!(json["businessProfile"]["blogURLs"][0], "https://bikes.example/blog");
        assert!(json["businessProfile"]["siteURL"].is_null());
        assert_eq!(json["competitors"][0], "https://rival.example");
    }

    #[test]
    fn publish_payload_keeps_requested_total() {
        let ids = vec![IdeaId::generate(), IdeaId::generate()];
        let payload = JobPayload::Publish(PublishPayload::new(&ids));
        let restored = JobPayload::from_json(JobType::Publish, payload.to_json().unwrap()).unwrap();
        let publish = restored.as_publish().unwrap();
        assert_eq!(publish.articles_count, 2);
        assert_eq!(publish.idea_ids().unwrap(), ids);
    }

    #[test]
    fn payload_of_wrong_shape_is_a_persistence_error() {
        let err = JobPayload::from_json(JobType::Publish, serde_json::json!({"foo": 1})).unwrap_err();
        assert!(matches!(err, DomainError::Persistence(_)));
    }
}
