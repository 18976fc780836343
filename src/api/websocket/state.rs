//! Shared application state for HTTP and WebSocket handlers

use std::sync::Arc;

use crate::config::Config;
use crate::relay::Relay;

/// State handed to every axum handler
pub struct AppState {
    /// The relay (registry + connection hub)
    pub relay: Arc<Relay>,

    /// Settings the server was started with
    pub config: Config,
}

impl AppState {
    pub fn new(relay: Arc<Relay>, config: Config) -> Self {
        Self { relay, config }
    }
}
