use crate::application::ApplicationResult;
use crate::application::ports::queue::TaskQueue;
use async_trait::async_trait;
use tracing::info;

/// Logs each message and drops it. Used when no Redis is configured, so
/// nothing is retained between sends.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopTaskQueue;

#[async_trait]
impl TaskQueue for NoopTaskQueue {
    async fn send_message(&self, queue_name: &str, body: &[u8]) -> ApplicationResult<()> {
        info!(queue = queue_name, bytes = body.len(), "task message dropped, no queue configured");
        Ok(())
    }
}
