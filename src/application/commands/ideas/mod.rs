// src/application/commands/ideas/mod.rs
mod feedback;
mod generate;
mod service;

pub use feedback::SetIdeaFeedbackCommand;
pub use generate::GenerateIdeasCommand;
pub use service::IdeaCommandService;
