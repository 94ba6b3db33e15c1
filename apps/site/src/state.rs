use std::sync::Arc;

use crate::config::Config;
use crate::content::ContentStore;
use crate::site::contact::ContactTransport;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Read-only for the life of the process, so sharing it needs no locking.
    pub content: Arc<ContentStore>,
    pub config: Config,
    /// Pluggable contact delivery. Default: SimulatedTransport.
    pub contact: Arc<dyn ContactTransport>,
}
