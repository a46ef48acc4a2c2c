//! Location resolver abstraction for the "use current location" action.

use std::time::Duration;

use async_trait::async_trait;

use crate::config::{LOCATION_LOOKUP_MS, RESOLVED_MOCK_ADDRESS};
use crate::error::RentResult;

/// Abstraction over device geolocation.
#[async_trait]
pub trait GeoResolver: Send + Sync + Clone {
    /// Resolve the current position to a human-readable address.
    async fn resolve_current(&self) -> RentResult<String>;
}

/// Resolver that returns a fixed address after a fixed delay.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimulatedGeoResolver;

impl SimulatedGeoResolver {
    pub const fn new() -> Self {
        Self
    }
}

#[async_trait]
impl GeoResolver for SimulatedGeoResolver {
    async fn resolve_current(&self) -> RentResult<String> {
        tokio::time::sleep(Duration::from_millis(LOCATION_LOOKUP_MS)).await;
        Ok(RESOLVED_MOCK_ADDRESS.to_string())
    }
}
