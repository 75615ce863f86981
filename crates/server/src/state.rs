use crate::config::Config;
use axum::http::StatusCode;
use metrodash::prelude::*;
use std::sync::Arc;
use tracing::warn;

pub struct AppState {
    pub config: Config,
    pub store: SnapshotStore,
    pub client: reqwest::Client,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            store: SnapshotStore::new(),
            client: reqwest::Client::new(),
        }
    }

    /// The snapshot handlers answer from. Until the first successful load
    /// there is nothing to serve.
    pub fn snapshot(&self) -> Result<Arc<LoadedData>, StatusCode> {
        self.store.current().ok_or_else(|| {
            warn!("No snapshot loaded yet");
            StatusCode::SERVICE_UNAVAILABLE
        })
    }
}
