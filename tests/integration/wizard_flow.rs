//! Happy-path onboarding scenarios.

use rentmarket::{StepOutcome, WizardStage, WizardStep};

use crate::common::harness::{dob, ADDRESS, MOBILE, NAME, OTP};
use crate::common::WizardHarness;

#[tokio::test]
async fn test_full_mobile_flow_reaches_completed_with_profile() {
    let harness = WizardHarness::new();

    harness.complete().await;

    let profile = harness.wizard.profile().expect("profile after completion");
    assert_eq!(profile.mobile, MOBILE);
    assert_eq!(profile.name, NAME);
    assert_eq!(profile.dob, dob());
    assert_eq!(profile.address, ADDRESS);

    // The gateway saw the whole provisioning sequence.
    assert_eq!(harness.auth.sent_codes().await, vec![MOBILE]);
    assert_eq!(
        harness.auth.verified_codes().await,
        vec![(MOBILE.to_string(), OTP.to_string())]
    );
    assert_eq!(harness.auth.saved_addresses().await, vec![ADDRESS]);

    // Completion unlocks the session with the profile attached.
    assert!(harness.unlock_session());
    assert!(harness.session.is_authenticated());
    assert_eq!(harness.session.profile().unwrap().name, NAME);
}

#[tokio::test]
async fn test_skip_goes_straight_to_terminal_without_profile() {
    let harness = WizardHarness::new();

    let outcome = harness.wizard.skip();

    assert_eq!(outcome, StepOutcome::Transitioned(WizardStage::Skipped));
    assert_eq!(harness.wizard.profile(), None);

    // Skip sets the same authenticated gate, with no profile payload.
    assert!(harness.unlock_session());
    assert!(harness.session.is_authenticated());
    assert_eq!(harness.session.profile(), None);

    // No gateway traffic happened at all.
    assert!(harness.auth.sent_codes().await.is_empty());
}

#[tokio::test]
async fn test_federated_login_bypasses_otp_entirely() {
    let harness = WizardHarness::new();

    let outcome = harness.wizard.federated_login().await;

    assert_eq!(
        outcome,
        StepOutcome::Transitioned(WizardStage::InProgress(WizardStep::ProfileEntry))
    );
    assert!(harness.auth.sent_codes().await.is_empty());
    assert!(harness.auth.verified_codes().await.is_empty());

    // The rest of the flow proceeds normally without a mobile number.
    harness.wizard.submit_profile(NAME, Some(dob())).await;
    harness.wizard.submit_address(ADDRESS).await;

    let profile = harness.wizard.profile().unwrap();
    assert_eq!(profile.mobile, "");
    assert_eq!(profile.name, NAME);
}

#[tokio::test]
async fn test_back_preserves_entered_mobile_number() {
    let harness = WizardHarness::new();
    harness.wizard.submit_mobile("5551234567").await;

    let outcome = harness.wizard.back();

    assert_eq!(
        outcome,
        StepOutcome::Transitioned(WizardStage::InProgress(WizardStep::MobileEntry))
    );
    assert_eq!(harness.wizard.draft().mobile, "5551234567");
}

#[tokio::test]
async fn test_fields_persist_across_back_and_forward_navigation() {
    let harness = WizardHarness::new();
    harness.advance_to_address().await;

    // Walk all the way back to the first step.
    harness.wizard.back();
    harness.wizard.back();
    harness.wizard.back();
    assert_eq!(
        harness.wizard.stage(),
        WizardStage::InProgress(WizardStep::MobileEntry)
    );

    // Everything entered so far is still there.
    let draft = harness.wizard.draft();
    assert_eq!(draft.mobile, MOBILE);
    assert_eq!(draft.otp, OTP);
    assert_eq!(draft.name, NAME);
    assert_eq!(draft.dob, Some(dob()));

    // Moving forward again works with the same values.
    harness.complete().await;
    assert_eq!(harness.wizard.profile().unwrap().name, NAME);
}

#[tokio::test]
async fn test_step_numbers_stay_in_range_through_the_whole_flow() {
    let harness = WizardHarness::new();

    let mut seen = vec![harness.wizard.stage()];
    harness.advance_to_otp().await;
    seen.push(harness.wizard.stage());
    harness.wizard.submit_code(OTP).await;
    seen.push(harness.wizard.stage());
    harness.wizard.submit_profile(NAME, Some(dob())).await;
    seen.push(harness.wizard.stage());
    harness.wizard.submit_address(ADDRESS).await;
    seen.push(harness.wizard.stage());

    for stage in &seen {
        match stage.step() {
            Some(step) => assert!((1..=4).contains(&step.number())),
            None => assert!(stage.is_terminal()),
        }
    }
    // Forward progress is monotonic: 1, 2, 3, 4, terminal.
    let numbers: Vec<_> = seen.iter().filter_map(|s| s.step()).map(|s| s.number()).collect();
    assert_eq!(numbers, vec![1, 2, 3, 4]);
    assert_eq!(*seen.last().unwrap(), WizardStage::Completed);
}

#[tokio::test]
async fn test_location_lookup_then_submit_uses_resolved_address() {
    let harness = WizardHarness::new();
    harness.advance_to_address().await;
    harness.geo.set_resolved("99 Court St, Brooklyn, NY").await;

    let outcome = harness.wizard.use_current_location().await;
    assert_eq!(outcome, StepOutcome::Updated);
    assert_eq!(harness.wizard.draft().address, "99 Court St, Brooklyn, NY");

    // Submitting the resolved address completes the flow.
    let resolved = harness.wizard.draft().address;
    harness.wizard.submit_address(&resolved).await;
    assert_eq!(
        harness.wizard.profile().unwrap().address,
        "99 Court St, Brooklyn, NY"
    );
}
