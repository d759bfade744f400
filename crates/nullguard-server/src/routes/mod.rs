use crate::config::ServerConfig;
use nullguard_core::NullFieldValidator;
use std::sync::Arc;

pub mod validate;

/// Shared, read-only state handed to every request.
#[derive(Debug, Clone)]
pub struct AppState {
    pub validator: Arc<NullFieldValidator>,
    pub max_depth: usize,
}

impl AppState {
    pub fn new(validator: NullFieldValidator, max_depth: usize) -> Self {
        Self {
            validator: Arc::new(validator),
            max_depth,
        }
    }

    pub fn from_config(cfg: &ServerConfig) -> Self {
        Self::new(cfg.validator(), cfg.max_depth)
    }
}
