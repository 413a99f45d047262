//! Startup context - remote clients constructed once, shared by handle.
//!
//! A client that fails to construct is recorded here rather than crashing
//! the run; the orchestrator skips the phases that depend on it.

use std::sync::Arc;

use crate::config::Config;
use crate::infra::{
    DocumentStore, IdentityService, RestDocumentStore, RestIdentityClient,
};

/// Explicit replacement for process-wide SDK singletons: both clients are
/// built once at startup and passed to each component's constructor.
pub struct SeedContext {
    identity: Option<Arc<dyn IdentityService>>,
    store: Option<Arc<dyn DocumentStore>>,
}

impl SeedContext {
    /// Construct both clients from configuration, recording failures.
    pub fn initialize(config: &Config) -> Self {
        let identity = match RestIdentityClient::new(config) {
            Ok(client) => Some(Arc::new(client) as Arc<dyn IdentityService>),
            Err(e) => {
                tracing::error!(code = e.code(), error = %e, "Identity client unavailable");
                None
            }
        };

        let store = match RestDocumentStore::new(config) {
            Ok(client) => Some(Arc::new(client) as Arc<dyn DocumentStore>),
            Err(e) => {
                tracing::error!(code = e.code(), error = %e, "Document store client unavailable");
                None
            }
        };

        Self { identity, store }
    }

    /// Identity service handle, if the client initialized.
    pub fn identity(&self) -> Option<Arc<dyn IdentityService>> {
        self.identity.clone()
    }

    /// Document store handle, if the client initialized.
    pub fn store(&self) -> Option<Arc<dyn DocumentStore>> {
        self.store.clone()
    }
}
