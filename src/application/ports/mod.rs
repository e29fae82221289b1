// src/application/ports/mod.rs
pub mod queue;
pub mod time;
