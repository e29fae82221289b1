pub mod ideas;
pub mod jobs;
pub mod publish;
