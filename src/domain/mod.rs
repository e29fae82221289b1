pub mod article;
pub mod business;
pub mod errors;
mod identifier;
pub mod idea;
pub mod job;
pub mod quota;
pub mod user;
