//! Auth gateway abstraction for the onboarding flow.

use std::time::Duration;

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::config::AUTH_ROUND_TRIP_MS;
use crate::error::RentResult;

/// Abstraction over the account service backing the onboarding wizard.
///
/// The wizard never talks to a real identity service; it hands each step to
/// this gateway and reacts to the outcome. The trait enables testing the
/// wizard against instant, failure-injecting implementations.
#[async_trait]
pub trait AuthGateway: Send + Sync + Clone {
    /// Request a one-time code to be sent to the given mobile number.
    async fn send_code(&self, mobile: &str) -> RentResult<()>;

    /// Verify a one-time code previously sent to the given mobile number.
    ///
    /// A rejection (wrong or expired code) is an `Err`; the wizard stays on
    /// the verification step and surfaces the message.
    async fn verify_code(&self, mobile: &str, code: &str) -> RentResult<()>;

    /// Authenticate through the federated provider, bypassing OTP entirely.
    async fn federated_login(&self) -> RentResult<()>;

    /// Persist the name and date of birth entered on the profile step.
    async fn save_profile(&self, name: &str, dob: NaiveDate) -> RentResult<()>;

    /// Persist the address entered on the final step.
    async fn save_address(&self, address: &str) -> RentResult<()>;
}

/// Always-successful gateway that stands in for a real identity service.
///
/// Each call sleeps for the fixed round-trip latency and succeeds. No code
/// is actually issued or checked; structural validation of the entered code
/// happens in the wizard.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimulatedAuthGateway;

impl SimulatedAuthGateway {
    pub const fn new() -> Self {
        Self
    }

    async fn round_trip(&self) {
        tokio::time::sleep(Duration::from_millis(AUTH_ROUND_TRIP_MS)).await;
    }
}

#[async_trait]
impl AuthGateway for SimulatedAuthGateway {
    async fn send_code(&self, mobile: &str) -> RentResult<()> {
        tracing::debug!(mobile, "simulating OTP dispatch");
        self.round_trip().await;
        Ok(())
    }

    async fn verify_code(&self, mobile: &str, _code: &str) -> RentResult<()> {
        tracing::debug!(mobile, "simulating OTP verification");
        self.round_trip().await;
        Ok(())
    }

    async fn federated_login(&self) -> RentResult<()> {
        tracing::debug!("simulating federated login");
        self.round_trip().await;
        Ok(())
    }

    async fn save_profile(&self, name: &str, _dob: NaiveDate) -> RentResult<()> {
        tracing::debug!(name, "simulating profile save");
        self.round_trip().await;
        Ok(())
    }

    async fn save_address(&self, _address: &str) -> RentResult<()> {
        tracing::debug!("simulating address save");
        self.round_trip().await;
        Ok(())
    }
}
