pub mod database;
pub mod queue;
pub mod repositories;
pub mod time;
