//! Hold/release gate shared by the mock gateways.

use std::sync::Arc;

use tokio::sync::{RwLock, Semaphore};

/// A gate the mock gateways pass through on every call.
///
/// Open by default. While held, calls block inside the gateway, which keeps
/// the caller's pending guard observable from a test; releasing lets every
/// blocked call proceed.
#[derive(Debug, Clone, Default)]
pub struct Gate {
    barrier: Arc<RwLock<Option<Arc<Semaphore>>>>,
}

impl Gate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hold the gate: subsequent calls block until [`Gate::release`].
    pub async fn hold(&self) {
        *self.barrier.write().await = Some(Arc::new(Semaphore::new(0)));
    }

    /// Release the gate, unblocking every waiting call.
    pub async fn release(&self) {
        if let Some(semaphore) = self.barrier.write().await.take() {
            semaphore.add_permits(Semaphore::MAX_PERMITS);
        }
    }

    /// Wait for the gate to open (no-op unless held).
    pub(crate) async fn pass(&self) {
        let barrier = self.barrier.read().await.clone();
        if let Some(semaphore) = barrier {
            // A closed-semaphore error cannot happen here; treat it as open.
            let _permit = semaphore.acquire().await;
        }
    }
}
