//! The onboarding state machine.
//!
//! Transitions are driven by user actions forwarded from the rendering
//! layer; every asynchronous step runs against the injected gateways and is
//! raced against a cancellation token so a teardown can never act on a
//! stale result. A single pending guard covers the whole suspension window:
//! while one action is in flight, every other action is a no-op.

use std::future::Future;
use std::sync::Arc;

use chrono::NaiveDate;
use parking_lot::Mutex;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

use crate::config::OTP_CODE_LEN;
use crate::error::{FieldError, RentResult};
use crate::traits::{AuthGateway, GeoResolver};

use super::state::{Profile, ProfileDraft, WizardStage, WizardStep};

/// Resolution of a single wizard action.
#[derive(Debug, Clone, PartialEq)]
pub enum StepOutcome {
    /// The wizard moved to a new stage.
    Transitioned(WizardStage),

    /// Fields changed but the stage did not (location lookup).
    Updated,

    /// Another action is in flight; this one was dropped, not queued.
    Busy,

    /// The action does not apply to the current stage.
    NotApplicable,

    /// A field failed validation; no state changed.
    Invalid(FieldError),

    /// The gateway call failed; the wizard re-presents the same step with
    /// this message and the pending guard cleared.
    Failed(String),

    /// The wizard was torn down while the action was in flight.
    Cancelled,
}

#[derive(Debug, Default)]
struct WizardInner {
    stage: WizardStage,
    draft: ProfileDraft,
    pending: bool,
    error: Option<String>,
}

impl WizardInner {
    fn begin(&mut self) {
        self.pending = true;
        self.error = None;
    }
}

/// Cloneable handle to one onboarding session.
///
/// All clones share the same state; the handle is cheap to pass to the
/// rendering layer and to background tasks.
#[derive(Clone)]
pub struct Wizard<A: AuthGateway, G: GeoResolver> {
    auth: A,
    geo: G,
    inner: Arc<Mutex<WizardInner>>,
    cancel: CancellationToken,
}

impl<A: AuthGateway, G: GeoResolver> Wizard<A, G> {
    /// Start a fresh wizard at the mobile-entry step.
    pub fn new(auth: A, geo: G) -> Self {
        Self::with_cancellation(auth, geo, CancellationToken::new())
    }

    /// Start a fresh wizard tied to an externally owned cancellation token.
    pub fn with_cancellation(auth: A, geo: G, cancel: CancellationToken) -> Self {
        Self {
            auth,
            geo,
            inner: Arc::new(Mutex::new(WizardInner::default())),
            cancel,
        }
    }

    /// Current stage.
    pub fn stage(&self) -> WizardStage {
        self.inner.lock().stage
    }

    /// Snapshot of the accumulated field values.
    pub fn draft(&self) -> ProfileDraft {
        self.inner.lock().draft.clone()
    }

    /// Whether an asynchronous action is currently in flight.
    pub fn is_pending(&self) -> bool {
        self.inner.lock().pending
    }

    /// The message from the most recent failed action, if any.
    pub fn last_error(&self) -> Option<String> {
        self.inner.lock().error.clone()
    }

    /// The accumulated profile, available once the wizard has completed.
    pub fn profile(&self) -> Option<Profile> {
        let inner = self.inner.lock();
        if inner.stage != WizardStage::Completed {
            return None;
        }
        let dob = inner.draft.dob?;
        Some(Profile {
            mobile: inner.draft.mobile.clone(),
            name: inner.draft.name.clone(),
            dob,
            address: inner.draft.address.clone(),
        })
    }

    /// Token cancelling any in-flight action when the owner tears down.
    pub fn cancellation_token(&self) -> CancellationToken {
        self.cancel.clone()
    }

    /// Submit the mobile number; on success an OTP is dispatched and the
    /// wizard moves to verification.
    pub async fn submit_mobile(&self, mobile: &str) -> StepOutcome {
        let mobile = mobile.trim().to_string();
        {
            let mut inner = self.inner.lock();
            if let Err(outcome) = check_actionable(&inner, WizardStep::MobileEntry) {
                return outcome;
            }
            if mobile.is_empty() {
                return StepOutcome::Invalid(FieldError::new(
                    "mobile",
                    "Mobile number is required",
                ));
            }
            inner.draft.mobile = mobile.clone();
            inner.begin();
        }

        let result = self.race(self.auth.send_code(&mobile)).await;
        self.settle(
            result,
            "submit_mobile",
            WizardStage::InProgress(WizardStep::OtpVerify),
        )
    }

    /// Authenticate through the federated provider, bypassing OTP.
    pub async fn federated_login(&self) -> StepOutcome {
        {
            let mut inner = self.inner.lock();
            if let Err(outcome) = check_actionable(&inner, WizardStep::MobileEntry) {
                return outcome;
            }
            inner.begin();
        }

        let result = self.race(self.auth.federated_login()).await;
        self.settle(
            result,
            "federated_login",
            WizardStage::InProgress(WizardStep::ProfileEntry),
        )
    }

    /// Skip the whole flow from the first step. Terminal, no validation,
    /// no profile.
    pub fn skip(&self) -> StepOutcome {
        let mut inner = self.inner.lock();
        if inner.pending {
            return StepOutcome::Busy;
        }
        if inner.stage != WizardStage::InProgress(WizardStep::MobileEntry) {
            return StepOutcome::NotApplicable;
        }
        inner.stage = WizardStage::Skipped;
        info!("onboarding skipped");
        StepOutcome::Transitioned(WizardStage::Skipped)
    }

    /// Submit the one-time code. Only the structural length rule is checked
    /// here; correctness is the gateway's concern.
    pub async fn submit_code(&self, code: &str) -> StepOutcome {
        let code = code.trim().to_string();
        let mobile;
        {
            let mut inner = self.inner.lock();
            if let Err(outcome) = check_actionable(&inner, WizardStep::OtpVerify) {
                return outcome;
            }
            if code.chars().count() != OTP_CODE_LEN {
                return StepOutcome::Invalid(FieldError::new(
                    "otp",
                    format!("Code must be {OTP_CODE_LEN} characters"),
                ));
            }
            inner.draft.otp = code.clone();
            mobile = inner.draft.mobile.clone();
            inner.begin();
        }

        let result = self.race(self.auth.verify_code(&mobile, &code)).await;
        self.settle(
            result,
            "submit_code",
            WizardStage::InProgress(WizardStep::ProfileEntry),
        )
    }

    /// Submit the display name and date of birth.
    pub async fn submit_profile(&self, name: &str, dob: Option<NaiveDate>) -> StepOutcome {
        let name = name.trim().to_string();
        let dob = {
            let mut inner = self.inner.lock();
            if let Err(outcome) = check_actionable(&inner, WizardStep::ProfileEntry) {
                return outcome;
            }
            if name.is_empty() {
                return StepOutcome::Invalid(FieldError::new("name", "Full name is required"));
            }
            let Some(dob) = dob else {
                return StepOutcome::Invalid(FieldError::new("dob", "Pick a date of birth"));
            };
            inner.draft.name = name.clone();
            inner.draft.dob = Some(dob);
            inner.begin();
            dob
        };

        let result = self.race(self.auth.save_profile(&name, dob)).await;
        self.settle(
            result,
            "submit_profile",
            WizardStage::InProgress(WizardStep::AddressEntry),
        )
    }

    /// Resolve the current location into the address field without leaving
    /// the address step. Takes the same pending guard as the step actions.
    pub async fn use_current_location(&self) -> StepOutcome {
        {
            let mut inner = self.inner.lock();
            if let Err(outcome) = check_actionable(&inner, WizardStep::AddressEntry) {
                return outcome;
            }
            inner.begin();
        }

        let result = self.race(self.geo.resolve_current()).await;
        let mut inner = self.inner.lock();
        inner.pending = false;
        match result {
            None => StepOutcome::Cancelled,
            Some(Err(e)) => {
                let message = e.to_string();
                warn!(error = %message, "location lookup failed");
                inner.error = Some(message.clone());
                StepOutcome::Failed(message)
            }
            Some(Ok(address)) => {
                inner.draft.address = address;
                StepOutcome::Updated
            }
        }
    }

    /// Submit the address; on success the wizard completes and the profile
    /// becomes available.
    pub async fn submit_address(&self, address: &str) -> StepOutcome {
        let address = address.trim().to_string();
        {
            let mut inner = self.inner.lock();
            if let Err(outcome) = check_actionable(&inner, WizardStep::AddressEntry) {
                return outcome;
            }
            if address.is_empty() {
                return StepOutcome::Invalid(FieldError::new("address", "Address is required"));
            }
            inner.draft.address = address.clone();
            inner.begin();
        }

        let result = self.race(self.auth.save_address(&address)).await;
        self.settle(result, "submit_address", WizardStage::Completed)
    }

    /// Go back one step without clearing already-entered field values.
    pub fn back(&self) -> StepOutcome {
        let mut inner = self.inner.lock();
        if inner.pending {
            return StepOutcome::Busy;
        }
        let Some(step) = inner.stage.step() else {
            return StepOutcome::NotApplicable;
        };
        let Some(previous) = step.previous() else {
            return StepOutcome::NotApplicable;
        };
        inner.error = None;
        inner.stage = WizardStage::InProgress(previous);
        StepOutcome::Transitioned(inner.stage)
    }

    async fn race<T>(&self, call: impl Future<Output = RentResult<T>>) -> Option<RentResult<T>> {
        tokio::select! {
            () = self.cancel.cancelled() => None,
            result = call => Some(result),
        }
    }

    fn settle(
        &self,
        result: Option<RentResult<()>>,
        action: &str,
        next: WizardStage,
    ) -> StepOutcome {
        let mut inner = self.inner.lock();
        inner.pending = false;
        match result {
            None => {
                info!(action, "onboarding action cancelled by teardown");
                StepOutcome::Cancelled
            }
            Some(Err(e)) => {
                let message = e.to_string();
                warn!(action, error = %message, "onboarding action failed");
                inner.error = Some(message.clone());
                StepOutcome::Failed(message)
            }
            Some(Ok(())) => {
                inner.stage = next;
                info!(action, stage = ?next, "onboarding advanced");
                StepOutcome::Transitioned(next)
            }
        }
    }
}

fn check_actionable(inner: &WizardInner, required: WizardStep) -> Result<(), StepOutcome> {
    if inner.pending {
        return Err(StepOutcome::Busy);
    }
    match inner.stage {
        WizardStage::InProgress(step) if step == required => Ok(()),
        _ => Err(StepOutcome::NotApplicable),
    }
}
