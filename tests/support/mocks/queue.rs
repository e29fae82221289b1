// tests/support/mocks/queue.rs
use async_trait::async_trait;
use postpilot_core::application::{
    ApplicationResult, error::ApplicationError, ports::queue::TaskQueue,
};
use serde_json::Value;
use std::collections::HashSet;
use std::sync::Mutex;

/// Records every delivered message. Individual send attempts (1-based,
/// counted across all queues) or every attempt can be made to fail.
#[derive(Default)]
pub struct RecordingQueue {
    delivered: Mutex<Vec<(String, Value)>>,
    attempts: Mutex<usize>,
    failing_attempts: Mutex<HashSet<usize>>,
    fail_all: Mutex<bool>,
}

impl RecordingQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fail_on_attempt(&self, attempt: usize) {
        self.failing_attempts.lock().unwrap().insert(attempt);
    }

    pub fn fail_everything(&self) {
        *self.fail_all.lock().unwrap() = true;
    }

    pub fn attempts(&self) -> usize {
        *self.attempts.lock().unwrap()
    }

    pub fn messages(&self) -> Vec<(String, Value)> {
        self.delivered.lock().unwrap().clone()
    }

    pub fn messages_on(&self, queue_name: &str) -> Vec<Value> {
        self.messages()
            .into_iter()
            .filter(|(name, _)| name == queue_name)
            .map(|(_, body)| body)
            .collect()
    }
}

#[async_trait]
impl TaskQueue for RecordingQueue {
    async fn send_message(&self, queue_name: &str, body: &[u8]) -> ApplicationResult<()> {
        let attempt = {
            let mut attempts = self.attempts.lock().unwrap();
            *attempts += 1;
            *attempts
        };
        if *self.fail_all.lock().unwrap() || self.failing_attempts.lock().unwrap().contains(&attempt)
        {
            return Err(ApplicationError::infrastructure("queue unavailable"));
        }
        let value: Value = serde_json::from_slice(body).unwrap();
        self.delivered
            .lock()
            .unwrap()
            .push((queue_name.to_owned(), value));
        Ok(())
    }
}
