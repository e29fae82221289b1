pub mod ideas;
pub mod jobs;
pub mod publish;
pub mod serde_time;

pub use ideas::{GenerateIdeasDto, IdeaDto, IdeasStatusDto, RegenerationQuotaDto};
pub use jobs::{ArticleDto, JobDto};
pub use publish::{PublishArticlesDto, PublishStatusDto};
