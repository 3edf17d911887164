//! Application state for dependency injection.

use std::sync::Arc;

use common::AppResult;
use tera::Tera;

use crate::config::WebConfig;
use crate::templates::load_templates;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub templates: Arc<Tera>,
    pub config: WebConfig,
}

impl AppState {
    /// Create new app state.
    pub fn new(templates: Arc<Tera>, config: WebConfig) -> Self {
        Self { templates, config }
    }

    /// Validate the config and compile the page templates.
    pub fn build(config: WebConfig) -> AppResult<Self> {
        config.check()?;
        let templates = Arc::new(load_templates()?);
        Ok(Self::new(templates, config))
    }
}
