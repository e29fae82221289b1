// src/infrastructure/queue/redis_queue.rs
use crate::application::ApplicationResult;
use crate::application::error::ApplicationError;
use crate::application::ports::queue::TaskQueue;
use async_trait::async_trait;
use deadpool_redis::{Config as DeadpoolConfig, Pool, Runtime};
use redis::AsyncCommands;
use tracing::debug;

/// Task queue backed by one Redis list per queue name. Producers `RPUSH`,
/// workers are expected to `BLPOP` from the same key.
#[derive(Clone)]
pub struct RedisTaskQueue {
    pool: Pool,
    key_prefix: String,
}

impl RedisTaskQueue {
    /// Create a queue from a redis URL (e.g. redis://:password@host:6379/0).
    pub fn from_url(url: &str) -> Result<Self, ApplicationError> {
        let cfg = DeadpoolConfig::from_url(url);
        let pool = cfg
            .create_pool(Some(Runtime::Tokio1))
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))?;

        Ok(Self {
            pool,
            key_prefix: "queue:".into(),
        })
    }

    fn key(&self, queue_name: &str) -> String {
        format!("{}{queue_name}", self.key_prefix)
    }
}

#[async_trait]
impl TaskQueue for RedisTaskQueue {
    async fn send_message(&self, queue_name: &str, body: &[u8]) -> ApplicationResult<()> {
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))?;

        let depth: i64 = conn
            .rpush(self.key(queue_name), body)
            .await
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))?;
        debug!(queue = queue_name, depth, "task message pushed");
        Ok(())
    }
}
