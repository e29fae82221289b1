pub mod entity;
pub mod repository;
pub mod value_objects;

pub use entity::{ArticleIdea, NewArticleIdea};
pub use repository::{IdeaReadRepository, IdeaWriteRepository};
pub use value_objects::{Feedback, IdeaId, IdeaSummary, IdeaTitle};
