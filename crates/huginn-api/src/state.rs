//! Application state for the API server.

use std::net::SocketAddr;
use std::sync::Arc;

use huginn_hal::Backend;
use rustc_hash::FxHashMap;
use tokio::sync::RwLock;

/// API server configuration.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Address to bind the server to.
    pub bind_address: SocketAddr,
    /// Default backend name; when unset, any registered backend is used.
    pub default_backend: Option<String>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            bind_address: ([127, 0, 0, 1], 3000).into(),
            default_backend: None,
        }
    }
}

/// Shared application state.
pub struct AppState {
    /// Configured backends (name -> Backend instance).
    pub backends: Arc<RwLock<FxHashMap<String, Arc<dyn Backend>>>>,
    /// Server configuration.
    pub config: ApiConfig,
}

impl AppState {
    /// Create a new application state with default configuration.
    pub fn new() -> Self {
        Self::with_config(ApiConfig::default())
    }

    /// Create application state with custom configuration.
    pub fn with_config(config: ApiConfig) -> Self {
        Self {
            backends: Arc::new(RwLock::new(FxHashMap::default())),
            config,
        }
    }

    /// Register a backend.
    pub async fn register_backend(&self, backend: Arc<dyn Backend>) {
        let name = backend.name().to_string();
        let mut backends = self.backends.write().await;
        backends.insert(name, backend);
    }

    /// Resolve a backend by name, falling back to the configured default and
    /// then to any registered backend.
    pub async fn backend(&self, name: Option<&str>) -> Option<Arc<dyn Backend>> {
        let backends = self.backends.read().await;
        if let Some(name) = name.or(self.config.default_backend.as_deref()) {
            return backends.get(name).cloned();
        }
        backends.values().next().cloned()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
