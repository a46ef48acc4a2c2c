//! Mock auth gateway for testing.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;
use tokio::sync::RwLock;

use crate::error::{RentError, RentResult};
use crate::traits::AuthGateway;

use super::gate::Gate;

/// Mock account service with recorded calls and injectable failures.
///
/// Instant by default. `set_fail_mode` makes every call fail;
/// `set_reject_codes` makes only code verification fail, exercising the
/// wrong-code path. The [`Gate`] holds calls open so tests can observe the
/// caller's pending window.
#[derive(Debug, Clone, Default)]
pub struct MockAuthGateway {
    sent_codes: Arc<RwLock<Vec<String>>>,
    verified: Arc<RwLock<Vec<(String, String)>>>,
    saved_profiles: Arc<RwLock<Vec<(String, NaiveDate)>>>,
    saved_addresses: Arc<RwLock<Vec<String>>>,
    fail_mode: Arc<RwLock<bool>>,
    reject_codes: Arc<RwLock<bool>>,
    gate: Gate,
}

impl MockAuthGateway {
    /// Create a new mock gateway.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether every call should fail.
    pub async fn set_fail_mode(&self, fail: bool) {
        *self.fail_mode.write().await = fail;
    }

    /// Set whether code verification should reject the submitted code.
    pub async fn set_reject_codes(&self, reject: bool) {
        *self.reject_codes.write().await = reject;
    }

    /// The gate calls pass through; hold it to freeze calls in flight.
    pub fn gate(&self) -> &Gate {
        &self.gate
    }

    /// Mobile numbers a code was dispatched to.
    pub async fn sent_codes(&self) -> Vec<String> {
        self.sent_codes.read().await.clone()
    }

    /// (mobile, code) pairs that were submitted for verification.
    pub async fn verified_codes(&self) -> Vec<(String, String)> {
        self.verified.read().await.clone()
    }

    /// Profiles persisted via `save_profile`.
    pub async fn saved_profiles(&self) -> Vec<(String, NaiveDate)> {
        self.saved_profiles.read().await.clone()
    }

    /// Addresses persisted via `save_address`.
    pub async fn saved_addresses(&self) -> Vec<String> {
        self.saved_addresses.read().await.clone()
    }

    async fn check_fail(&self, what: &str) -> RentResult<()> {
        if *self.fail_mode.read().await {
            return Err(RentError::Auth(format!("simulated {what} failure")));
        }
        Ok(())
    }
}

#[async_trait]
impl AuthGateway for MockAuthGateway {
    async fn send_code(&self, mobile: &str) -> RentResult<()> {
        self.gate.pass().await;
        self.check_fail("send").await?;
        self.sent_codes.write().await.push(mobile.to_string());
        Ok(())
    }

    async fn verify_code(&self, mobile: &str, code: &str) -> RentResult<()> {
        self.gate.pass().await;
        self.check_fail("verify").await?;
        if *self.reject_codes.read().await {
            return Err(RentError::Auth("code rejected".to_string()));
        }
        self.verified
            .write()
            .await
            .push((mobile.to_string(), code.to_string()));
        Ok(())
    }

    async fn federated_login(&self) -> RentResult<()> {
        self.gate.pass().await;
        self.check_fail("federated login").await
    }

    async fn save_profile(&self, name: &str, dob: NaiveDate) -> RentResult<()> {
        self.gate.pass().await;
        self.check_fail("profile save").await?;
        self.saved_profiles
            .write()
            .await
            .push((name.to_string(), dob));
        Ok(())
    }

    async fn save_address(&self, address: &str) -> RentResult<()> {
        self.gate.pass().await;
        self.check_fail("address save").await?;
        self.saved_addresses.write().await.push(address.to_string());
        Ok(())
    }
}
