mod dispatcher;
mod messages;

pub use crate::domain::job::ENQUEUE_FAILED_MESSAGE;
pub use dispatcher::{JobDispatcher, QueueNames};
pub use messages::{GenerateIdeasTask, PublishArticleTask, PublishJobStarted};
