//! Failure, pending-guard, and cancellation scenarios for the wizard.

use rentmarket::{StepOutcome, WizardStage, WizardStep};

use crate::common::harness::{dob, MOBILE, NAME, OTP};
use crate::common::WizardHarness;

#[tokio::test]
async fn test_send_failure_stays_on_mobile_step_with_error() {
    let harness = WizardHarness::new();
    harness.auth.set_fail_mode(true).await;

    let outcome = harness.wizard.submit_mobile(MOBILE).await;

    assert!(matches!(outcome, StepOutcome::Failed(_)));
    assert_eq!(
        harness.wizard.stage(),
        WizardStage::InProgress(WizardStep::MobileEntry)
    );
    assert!(!harness.wizard.is_pending(), "Failure must clear the guard");
    assert!(harness.wizard.last_error().is_some());
    // The entered value survives for the retry.
    assert_eq!(harness.wizard.draft().mobile, MOBILE);

    // Retry succeeds once the gateway recovers, never silently before.
    harness.auth.set_fail_mode(false).await;
    let retry = harness.wizard.submit_mobile(MOBILE).await;
    assert_eq!(
        retry,
        StepOutcome::Transitioned(WizardStage::InProgress(WizardStep::OtpVerify))
    );
    assert!(harness.wizard.last_error().is_none());
}

#[tokio::test]
async fn test_rejected_code_reenters_verification_step() {
    let harness = WizardHarness::new();
    harness.advance_to_otp().await;
    harness.auth.set_reject_codes(true).await;

    let outcome = harness.wizard.submit_code(OTP).await;

    let StepOutcome::Failed(message) = outcome else {
        panic!("Expected a code rejection");
    };
    assert!(message.contains("code rejected"));
    assert_eq!(
        harness.wizard.stage(),
        WizardStage::InProgress(WizardStep::OtpVerify)
    );

    // A corrected attempt goes through.
    harness.auth.set_reject_codes(false).await;
    let retry = harness.wizard.submit_code(OTP).await;
    assert_eq!(
        retry,
        StepOutcome::Transitioned(WizardStage::InProgress(WizardStep::ProfileEntry))
    );
}

#[tokio::test]
async fn test_wrong_length_code_never_reaches_the_gateway() {
    let harness = WizardHarness::new();
    harness.advance_to_otp().await;

    for code in ["", "123", "1234567"] {
        let outcome = harness.wizard.submit_code(code).await;
        assert!(
            matches!(outcome, StepOutcome::Invalid(ref e) if e.field == "otp"),
            "Code {code:?} should be rejected inline"
        );
    }

    assert!(harness.auth.verified_codes().await.is_empty());
}

#[tokio::test]
async fn test_all_actions_are_dropped_while_pending() {
    let harness = WizardHarness::new();
    harness.auth.gate().hold().await;

    let in_flight = {
        let wizard = harness.wizard.clone();
        tokio::spawn(async move { wizard.submit_mobile(MOBILE).await })
    };
    while !harness.wizard.is_pending() {
        tokio::task::yield_now().await;
    }

    // Every concurrent action is a no-op, none is queued.
    assert_eq!(harness.wizard.submit_mobile("5559999999").await, StepOutcome::Busy);
    assert_eq!(harness.wizard.federated_login().await, StepOutcome::Busy);
    assert_eq!(harness.wizard.submit_code(OTP).await, StepOutcome::Busy);
    assert_eq!(harness.wizard.back(), StepOutcome::Busy);
    assert_eq!(harness.wizard.skip(), StepOutcome::Busy);

    harness.auth.gate().release().await;
    let outcome = in_flight.await.unwrap();

    // Only the original action took effect, with its original input.
    assert_eq!(
        outcome,
        StepOutcome::Transitioned(WizardStage::InProgress(WizardStep::OtpVerify))
    );
    assert_eq!(harness.wizard.draft().mobile, MOBILE);
    assert_eq!(harness.auth.sent_codes().await, vec![MOBILE]);
}

#[tokio::test]
async fn test_teardown_cancels_the_in_flight_step() {
    let harness = WizardHarness::new();
    harness.auth.gate().hold().await;

    let in_flight = {
        let wizard = harness.wizard.clone();
        tokio::spawn(async move { wizard.submit_mobile(MOBILE).await })
    };
    while !harness.wizard.is_pending() {
        tokio::task::yield_now().await;
    }

    harness.wizard.cancellation_token().cancel();
    let outcome = in_flight.await.unwrap();

    assert_eq!(outcome, StepOutcome::Cancelled);
    assert!(!harness.wizard.is_pending());
    assert_eq!(
        harness.wizard.stage(),
        WizardStage::InProgress(WizardStep::MobileEntry),
        "A cancelled action never advances the stage"
    );
}

#[tokio::test]
async fn test_location_lookup_failure_keeps_typed_address() {
    let harness = WizardHarness::new();
    harness.advance_to_address().await;

    // The user typed something, then tried the lookup, which failed.
    harness.wizard.submit_address("").await; // Invalid, address stays empty
    harness.geo.set_fail_mode(true).await;

    let outcome = harness.wizard.use_current_location().await;

    assert!(matches!(outcome, StepOutcome::Failed(_)));
    assert_eq!(
        harness.wizard.stage(),
        WizardStage::InProgress(WizardStep::AddressEntry)
    );
    assert!(!harness.wizard.is_pending());

    // The step still works after the failed lookup.
    harness.geo.set_fail_mode(false).await;
    let outcome = harness.wizard.submit_address("1 Main St").await;
    assert_eq!(outcome, StepOutcome::Transitioned(WizardStage::Completed));
}

#[tokio::test]
async fn test_profile_failure_keeps_name_and_dob_for_retry() {
    let harness = WizardHarness::new();
    harness.advance_to_profile().await;
    harness.auth.set_fail_mode(true).await;

    let outcome = harness.wizard.submit_profile(NAME, Some(dob())).await;

    assert!(matches!(outcome, StepOutcome::Failed(_)));
    let draft = harness.wizard.draft();
    assert_eq!(draft.name, NAME);
    assert_eq!(draft.dob, Some(dob()));

    harness.auth.set_fail_mode(false).await;
    let retry = harness.wizard.submit_profile(NAME, Some(dob())).await;
    assert_eq!(
        retry,
        StepOutcome::Transitioned(WizardStage::InProgress(WizardStep::AddressEntry))
    );
}

#[tokio::test]
async fn test_terminal_wizard_ignores_further_actions() {
    let harness = WizardHarness::new();
    harness.wizard.skip();

    assert_eq!(harness.wizard.submit_mobile(MOBILE).await, StepOutcome::NotApplicable);
    assert_eq!(harness.wizard.back(), StepOutcome::NotApplicable);
    assert_eq!(harness.wizard.skip(), StepOutcome::NotApplicable);
    assert_eq!(harness.wizard.stage(), WizardStage::Skipped);
}
