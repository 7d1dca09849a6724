use std::sync::Arc;

use tokio::sync::Semaphore;

use crate::config::Config;

/// Shared application state injected into route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Bounds how many documents are laid out at once on the blocking pool.
    pub render_slots: Arc<Semaphore>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let render_slots = Arc::new(Semaphore::new(config.render_concurrency));
        Self {
            config,
            render_slots,
        }
    }
}
