use std::sync::Arc;

use crate::config::Config;
use crate::repository::ResumeRepository;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// The one repository both the editor and the preview read and write through.
    pub repository: Arc<ResumeRepository>,
    pub config: Config,
}
