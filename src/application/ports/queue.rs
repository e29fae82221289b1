// src/application/ports/queue.rs
use crate::application::ApplicationResult;
use async_trait::async_trait;

/// Outbound task queue. A successful send means the message was accepted
/// for delivery, not that a worker processed it.
#[async_trait]
pub trait TaskQueue: Send + Sync {
    async fn send_message(&self, queue_name: &str, body: &[u8]) -> ApplicationResult<()>;
}
