// tests/support/builders.rs
use chrono::{DateTime, Utc};
use postpilot_core::domain::business::{BusinessProfile, Location, Objective};
use postpilot_core::domain::idea::{ArticleIdea, IdeaId, IdeaSummary, IdeaTitle};
use postpilot_core::domain::job::JobId;
use postpilot_core::domain::user::{OnboardingStep, Plan, PlanId, User, UserId};
use uuid::Uuid;

use super::mocks::FIXED_NOW;

pub struct PlanBuilder {
    max_articles: u32,
    max_regenerations: u32,
}

impl PlanBuilder {
    pub fn new() -> Self {
        Self {
            max_articles: 10,
            max_regenerations: 3,
        }
    }

    pub fn max_articles(mut self, value: u32) -> Self {
        self.max_articles = value;
        self
    }

    pub fn max_regenerations(mut self, value: u32) -> Self {
        self.max_regenerations = value;
        self
    }

    pub fn build(self) -> Plan {
        Plan::new(
            PlanId::generate(),
            "Starter",
            self.max_articles,
            self.max_regenerations,
        )
        .unwrap()
    }
}

pub fn user_on(plan: &Plan, articles_used: u32) -> User {
    User {
        id: UserId::generate(),
        plan_id: plan.id,
        articles_used,
        onboarding_step: OnboardingStep::new(4).unwrap(),
        has_completed_onboarding: false,
        updated_at: *FIXED_NOW,
    }
}

pub fn complete_profile(user_id: UserId) -> BusinessProfile {
    BusinessProfile {
        id: Uuid::new_v4(),
        user_id,
        description: "Family-run bakery selling sourdough and pastries".into(),
        primary_objective: Objective::Leads,
        secondary_objective: Some(Objective::Branding),
        location: Location {
            country: "BR".into(),
            state: "SP".into(),
            city: "Campinas".into(),
            ..Location::default()
        },
        site_url: Some("https://bakery.example".into()),
        has_blog: true,
        blog_urls: vec!["https://bakery.example/blog".into()],
    }
}

pub struct IdeaBuilder {
    user_id: UserId,
    job_id: JobId,
    title: String,
    approved: bool,
    generated_at: DateTime<Utc>,
}

impl IdeaBuilder {
    pub fn new(user_id: UserId) -> Self {
        Self {
            user_id,
            job_id: JobId::generate(),
            title: "Five breads to bake at home".into(),
            approved: false,
            generated_at: *FIXED_NOW,
        }
    }

    pub fn job(mut self, job_id: JobId) -> Self {
        self.job_id = job_id;
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn approved(mut self) -> Self {
        self.approved = true;
        self
    }

    pub fn generated_at(mut self, at: DateTime<Utc>) -> Self {
        self.generated_at = at;
        self
    }

    pub fn build(self) -> ArticleIdea {
        ArticleIdea {
            id: IdeaId::generate(),
            user_id: self.user_id,
            job_id: self.job_id,
            title: IdeaTitle::new(self.title).unwrap(),
            summary: IdeaSummary::new("A short guide for beginners").unwrap(),
            approved: self.approved,
            feedback: None,
            generated_at: self.generated_at,
        }
    }
}
