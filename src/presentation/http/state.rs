// src/presentation/http/state.rs
use crate::application::services::ApplicationServices;
use std::sync::Arc;

#[derive(Clone)]
pub struct HttpState {
    pub services: Arc<ApplicationServices>,
    /// Shared secret of the worker callback routes. `None` disables them.
    pub worker_token: Option<Arc<str>>,
}
