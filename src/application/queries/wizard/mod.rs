mod ideas;
mod service;
mod status;

pub use service::WizardQueryService;
pub use status::{ideas_status_message, publish_status_message};
