mod service;
mod submit;

pub use service::PublishCommandService;
pub use submit::{
    ARTICLE_ENQUEUE_FAILED_MESSAGE, ArticleOutcome, MAX_PUBLISH_BATCH, PublishArticleItem,
    PublishArticlesCommand,
};
