//! Content-generation job engine: quota-limited idea generation, idea
//! approval, publish dispatch and polled job status.
pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod presentation;
