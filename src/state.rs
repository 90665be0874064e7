use std::sync::Arc;

use crate::auth::TokenVerifier;
use crate::store::DocumentStore;
use crate::tenant::TenantPaths;

/// Capability handles shared by all request handlers.
///
/// Constructed once at startup and cloned per request. The verifier and
/// store are trait objects so tests can substitute fakes; no handler
/// reaches these through ambient globals.
#[derive(Clone)]
pub struct AppState {
    pub verifier: Arc<dyn TokenVerifier>,
    pub store: Arc<dyn DocumentStore>,
    pub tenant: TenantPaths,
}

impl AppState {
    pub fn new(
        verifier: Arc<dyn TokenVerifier>,
        store: Arc<dyn DocumentStore>,
        tenant: TenantPaths,
    ) -> Self {
        Self {
            verifier,
            store,
            tenant,
        }
    }
}
