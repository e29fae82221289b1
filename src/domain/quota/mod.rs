// src/domain/quota/mod.rs
mod engine;
mod window;

pub use engine::QuotaEngine;
pub use window::{RegenerationQuota, TARGET_IDEA_COUNT, WINDOW};
