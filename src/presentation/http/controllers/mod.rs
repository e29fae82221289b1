// src/presentation/http/controllers/mod.rs
pub mod wizard;
pub mod worker;
