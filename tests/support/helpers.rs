// tests/support/helpers.rs
use axum::Router;
use axum::body::{self, Body};
use axum::http::{Request, StatusCode};
use chrono::Duration;
use postpilot_core::application::commands::jobs::{
    CompleteIdeaGenerationCommand, GeneratedIdea,
};
use postpilot_core::application::dispatch::QueueNames;
use postpilot_core::application::services::{ApplicationServices, Repositories};
use postpilot_core::domain::idea::IdeaId;
use postpilot_core::domain::user::{Plan, UserId};
use postpilot_core::presentation::http::{routes::build_router, state::HttpState};
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;

use super::builders::{IdeaBuilder, PlanBuilder, complete_profile, user_on};
use super::mocks::{
    AdjustableClock, InMemoryArticles, InMemoryIdeas, InMemoryJobs, InMemoryPlans,
    InMemoryProfiles, InMemoryUsers, RecordingQueue,
};

pub const WORKER_TOKEN: &str = "worker-secret-0123456789";

/// In-memory stores, queue and clock behind one set of application services.
pub struct TestWorld {
    pub users: Arc<InMemoryUsers>,
    pub plans: Arc<InMemoryPlans>,
    pub profiles: Arc<InMemoryProfiles>,
    pub jobs: Arc<InMemoryJobs>,
    pub ideas: Arc<InMemoryIdeas>,
    pub articles: Arc<InMemoryArticles>,
    pub queue: Arc<RecordingQueue>,
    pub clock: Arc<AdjustableClock>,
    pub services: Arc<ApplicationServices>,
    pub queues: QueueNames,
}

impl TestWorld {
    pub fn new() -> Self {
        let users = Arc::new(InMemoryUsers::default());
        let plans = Arc::new(InMemoryPlans::default());
        let profiles = Arc::new(InMemoryProfiles::default());
        let jobs = Arc::new(InMemoryJobs::default());
        let ideas = Arc::new(InMemoryIdeas::default());
        let articles = Arc::new(InMemoryArticles::default());
        let queue = Arc::new(RecordingQueue::new());
        let clock = Arc::new(AdjustableClock::new());
        let queues = QueueNames::default();

        let repos = Repositories {
            users: users.clone(),
            plans: plans.clone(),
            profiles: profiles.clone(),
            jobs: jobs.clone(),
            idea_read: ideas.clone(),
            idea_write: ideas.clone(),
            article_read: articles.clone(),
            article_write: articles.clone(),
        };
        let services = Arc::new(ApplicationServices::new(
            repos,
            queue.clone(),
            clock.clone(),
            queues.clone(),
        ));

        Self {
            users,
            plans,
            profiles,
            jobs,
            ideas,
            articles,
            queue,
            clock,
            services,
            queues,
        }
    }

    /// Seeds a plan, a user on it and a complete business profile.
    pub fn seed_user(&self, plan: PlanBuilder, articles_used: u32) -> UserId {
        let plan: Plan = plan.build();
        let user = user_on(&plan, articles_used);
        let id = user.id;
        self.plans.put(plan);
        self.users.put(user);
        self.profiles.put(complete_profile(id));
        id
    }

    /// Seeds ideas generated two hours ago, outside the regeneration window.
    /// The first `approved` of them are approved.
    pub fn seed_ideas(&self, user_id: UserId, count: usize, approved: usize) -> Vec<IdeaId> {
        let generated_at = self.clock_now() - Duration::hours(2);
        (0..count)
            .map(|n| {
                let mut builder = IdeaBuilder::new(user_id)
                    .title(format!("Idea number {}", n + 1))
                    .generated_at(generated_at);
                if n < approved {
                    builder = builder.approved();
                }
                let idea = builder.build();
                let id = idea.id;
                self.ideas.put(idea);
                id
            })
            .collect()
    }

    pub fn clock_now(&self) -> chrono::DateTime<chrono::Utc> {
        use postpilot_core::application::ports::time::Clock;
        self.clock.now()
    }

    /// Plays the worker for a generation job: starts it and stores `count` ideas.
    pub async fn finish_generation(&self, job_id: &str, count: usize) {
        self.services
            .job_progress
            .start_job(job_id)
            .await
            .unwrap();
        self.services
            .job_progress
            .complete_idea_generation(CompleteIdeaGenerationCommand {
                job_id: job_id.to_owned(),
                ideas: (0..count)
                    .map(|n| GeneratedIdea {
                        title: format!("Generated idea {}", n + 1),
                        summary: "Generated summary".into(),
                    })
                    .collect(),
            })
            .await
            .unwrap();
    }

    pub fn router(&self, worker_token: Option<&str>) -> Router {
        let state = HttpState {
            services: Arc::clone(&self.services),
            worker_token: worker_token.map(Arc::from),
        };
        build_router(state, &[])
    }
}

pub fn json_request(
    method: &str,
    uri: &str,
    headers: &[(&str, &str)],
    body: Option<Value>,
) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    for (name, value) in headers {
        builder = builder.header(*name, *value);
    }
    match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

pub async fn send(router: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = router.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}
