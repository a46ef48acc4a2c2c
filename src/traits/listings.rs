//! Listing submission abstraction.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use crate::config::LISTING_SUBMIT_MS;
use crate::error::RentResult;
use crate::listing::NewListing;

/// Abstraction over the service that accepts new rental listings.
///
/// The core validates the payload, hands it to this gateway, and exposes
/// pending/success/failure status to the caller. Where the listing ends up
/// is the gateway's business.
#[async_trait]
pub trait ListingGateway: Send + Sync + Clone {
    /// Publish a structurally valid listing. Returns the assigned listing id.
    async fn submit(&self, listing: &NewListing) -> RentResult<String>;
}

/// Always-successful gateway that mints sequential listing ids.
#[derive(Debug, Clone)]
pub struct SimulatedListingGateway {
    next_id: Arc<AtomicU64>,
}

impl SimulatedListingGateway {
    pub fn new() -> Self {
        Self {
            next_id: Arc::new(AtomicU64::new(1)),
        }
    }
}

impl Default for SimulatedListingGateway {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ListingGateway for SimulatedListingGateway {
    async fn submit(&self, listing: &NewListing) -> RentResult<String> {
        tracing::debug!(title = %listing.title, "simulating listing publication");
        tokio::time::sleep(Duration::from_millis(LISTING_SUBMIT_MS)).await;
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        Ok(format!("listing-{id}"))
    }
}
