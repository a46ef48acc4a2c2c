//! Mock listing gateway for testing.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::error::{RentError, RentResult};
use crate::listing::NewListing;
use crate::traits::ListingGateway;

use super::gate::Gate;

/// Mock submission service that records accepted listings.
#[derive(Debug, Clone, Default)]
pub struct MockListingGateway {
    accepted: Arc<RwLock<Vec<NewListing>>>,
    next_id: Arc<AtomicU64>,
    fail_mode: Arc<RwLock<bool>>,
    gate: Gate,
}

impl MockListingGateway {
    /// Create a new mock gateway.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether submissions should fail.
    pub async fn set_fail_mode(&self, fail: bool) {
        *self.fail_mode.write().await = fail;
    }

    /// The gate calls pass through; hold it to freeze calls in flight.
    pub fn gate(&self) -> &Gate {
        &self.gate
    }

    /// All listings accepted so far.
    pub async fn accepted(&self) -> Vec<NewListing> {
        self.accepted.read().await.clone()
    }

    /// Number of listings accepted so far.
    pub async fn accepted_count(&self) -> usize {
        self.accepted.read().await.len()
    }
}

#[async_trait]
impl ListingGateway for MockListingGateway {
    async fn submit(&self, listing: &NewListing) -> RentResult<String> {
        self.gate.pass().await;
        if *self.fail_mode.read().await {
            return Err(RentError::Submission(
                "simulated submission failure".to_string(),
            ));
        }
        self.accepted.write().await.push(listing.clone());
        let id = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
        Ok(format!("mock-listing-{id}"))
    }
}
