use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PublishArticlesDto {
    pub job_id: String,
    pub status: String,
    pub articles_count: u32,
    /// Per-article tasks that reached the queue.
    pub articles_enqueued: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PublishStatusDto {
    pub job_id: String,
    pub status: String,
    pub progress: u8,
    pub published: u32,
    pub total: u32,
    pub message: String,
    #[serde(default)]
    pub error_message: Option<String>,
}
