use std::sync::Arc;

use crate::application::services::{AssetService, MediaDispatcher};
use crate::presentation::config::DEFAULT_MAX_BODY_BYTES;

#[derive(Clone)]
pub struct AppState {
    pub dispatcher: Arc<MediaDispatcher>,
    pub assets: Arc<AssetService>,
    pub max_body_bytes: usize,
}

impl AppState {
    pub fn new(dispatcher: Arc<MediaDispatcher>, assets: Arc<AssetService>) -> Self {
        Self {
            dispatcher,
            assets,
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
        }
    }

    pub fn with_max_body_bytes(mut self, max_body_bytes: usize) -> Self {
        self.max_body_bytes = max_body_bytes;
        self
    }
}
