//! Mock location resolver for testing.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::config::RESOLVED_MOCK_ADDRESS;
use crate::error::{RentError, RentResult};
use crate::traits::GeoResolver;

use super::gate::Gate;

/// Mock resolver with a settable result and injectable failure.
#[derive(Debug, Clone)]
pub struct MockGeoResolver {
    resolved: Arc<RwLock<String>>,
    fail_mode: Arc<RwLock<bool>>,
    gate: Gate,
}

impl MockGeoResolver {
    /// Create a mock resolver returning the default simulated address.
    pub fn new() -> Self {
        Self {
            resolved: Arc::new(RwLock::new(RESOLVED_MOCK_ADDRESS.to_string())),
            fail_mode: Arc::new(RwLock::new(false)),
            gate: Gate::new(),
        }
    }

    /// Set the address future lookups resolve to.
    pub async fn set_resolved(&self, address: impl Into<String>) {
        *self.resolved.write().await = address.into();
    }

    /// Set whether lookups should fail.
    pub async fn set_fail_mode(&self, fail: bool) {
        *self.fail_mode.write().await = fail;
    }

    /// The gate calls pass through; hold it to freeze calls in flight.
    pub fn gate(&self) -> &Gate {
        &self.gate
    }
}

impl Default for MockGeoResolver {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl GeoResolver for MockGeoResolver {
    async fn resolve_current(&self) -> RentResult<String> {
        self.gate.pass().await;
        if *self.fail_mode.read().await {
            return Err(RentError::Geo("simulated lookup failure".to_string()));
        }
        Ok(self.resolved.read().await.clone())
    }
}
