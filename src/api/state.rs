use std::sync::Arc;

use crate::config::Config;
use crate::db::{InMemoryStore, UserDataStore};
use crate::error::AppResult;
use crate::services::{Optimizer, TracingTelemetry};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn UserDataStore>,
    pub optimizer: Arc<Optimizer>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    /// In-memory store with the default optimizer
    pub fn new() -> Self {
        Self::with_parts(Arc::new(InMemoryStore::new()), Optimizer::default())
    }

    /// In-memory store with an optimizer tuned by `config`
    pub fn from_config(config: &Config) -> AppResult<Self> {
        let optimizer = Optimizer::new(config.optimizer_settings(), Arc::new(TracingTelemetry))?;
        Ok(Self::with_parts(Arc::new(InMemoryStore::new()), optimizer))
    }

    pub fn with_parts(store: Arc<dyn UserDataStore>, optimizer: Optimizer) -> Self {
        Self {
            store,
            optimizer: Arc::new(optimizer),
        }
    }
}
