// src/infrastructure/repositories/mod.rs
mod articles;
mod business;
pub(crate) mod error;
mod ideas;
mod jobs;
mod users;

pub use articles::{PostgresArticleReadRepository, PostgresArticleWriteRepository};
pub use business::PostgresBusinessProfileRepository;
pub use error::map_sqlx;
pub use ideas::{PostgresIdeaReadRepository, PostgresIdeaWriteRepository};
pub use jobs::PostgresArticleJobRepository;
pub use users::{PostgresPlanRepository, PostgresUserRepository};
