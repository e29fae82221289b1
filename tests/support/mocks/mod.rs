// tests/support/mocks/mod.rs
pub mod articles;
pub mod ideas;
pub mod jobs;
pub mod queue;
pub mod time;
pub mod users;

pub use articles::InMemoryArticles;
pub use ideas::InMemoryIdeas;
pub use jobs::InMemoryJobs;
pub use queue::RecordingQueue;
pub use time::{AdjustableClock, FIXED_NOW};
pub use users::{InMemoryPlans, InMemoryProfiles, InMemoryUsers};
