// src/state.rs
use std::sync::Arc;

use crate::services::chatbot::TextGenerator;

pub type SharedState = Arc<AppState>;

/// Read-only for the life of the process; requests never write to it.
pub struct AppState {
    pub generator: Arc<dyn TextGenerator>,
}

impl AppState {
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self { generator }
    }
}
