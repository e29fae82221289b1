mod noop;
mod redis_queue;

pub use noop::NoopTaskQueue;
pub use redis_queue::RedisTaskQueue;
