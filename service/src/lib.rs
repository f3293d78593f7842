use crate::config::Config;
use sse::Emitter;

pub mod config;
pub mod logging;

// Service-level state containing only infrastructure concerns
// Needs to implement Clone to be able to be passed into Router as State
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub emitter: Emitter,
}

impl AppState {
    pub fn new(app_config: Config) -> Self {
        Self {
            config: app_config,
            emitter: Emitter::new(),
        }
    }
}
