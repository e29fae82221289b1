mod articles;
mod progress;
mod service;

pub use progress::{
    CompleteIdeaGenerationCommand, FailJobCommand, GeneratedIdea, ReportProgressCommand,
};
pub use service::JobProgressService;
