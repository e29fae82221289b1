// src/domain/job/mod.rs
pub mod entity;
pub mod payload;
pub mod repository;
pub mod services;
pub mod value_objects;

pub use entity::{ArticleJob, ENQUEUE_FAILED_MESSAGE, JobStateUpdate, NewArticleJob};
pub use payload::{BusinessProfileSnapshot, GenerateIdeasPayload, JobPayload, PublishPayload};
pub use repository::ArticleJobRepository;
pub use services::JobStore;
pub use value_objects::{JobId, JobStatus, JobType, Progress};
