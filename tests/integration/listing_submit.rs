//! New-listing validation and submission scenarios.

use chrono::NaiveDate;

use rentmarket::{Category, RentalUnit, SubmissionOutcome, SubmissionStatus};

use crate::common::ListingHarness;

#[tokio::test]
async fn test_valid_listing_reaches_the_gateway_intact() {
    let harness = ListingHarness::new();
    harness.fill_valid();
    harness.form.add_image("data:image/jpeg;base64,AAAA");
    harness.form.add_image("data:image/jpeg;base64,BBBB");

    let outcome = harness.form.submit().await;

    let SubmissionOutcome::Accepted { id } = outcome else {
        panic!("Expected acceptance");
    };
    assert_eq!(id, "mock-listing-1");

    let accepted = harness.gateway.accepted().await;
    assert_eq!(accepted.len(), 1);
    assert_eq!(accepted[0].title, "Folding Kayak");
    assert_eq!(accepted[0].category, Category::SportsEquipment);
    assert_eq!(accepted[0].unit, RentalUnit::PerDay);
    assert_eq!(accepted[0].images.len(), 2);

    // Success resets the form for the next ad.
    assert!(harness.draft().title.is_empty());
    assert!(matches!(
        harness.form.status(),
        SubmissionStatus::Succeeded { .. }
    ));
}

#[tokio::test]
async fn test_empty_form_reports_every_missing_field() {
    let harness = ListingHarness::new();

    let outcome = harness.form.submit().await;

    let SubmissionOutcome::Invalid(errors) = outcome else {
        panic!("Expected validation errors");
    };
    let fields: Vec<&str> = errors.iter().map(|e| e.field).collect();
    assert_eq!(
        fields,
        vec!["title", "description", "category", "brand", "price", "location"]
    );
    assert_eq!(harness.gateway.accepted_count().await, 0);
}

#[tokio::test]
async fn test_hourly_pricing_is_carried_through() {
    let harness = ListingHarness::new();
    harness.fill_valid();
    harness.form.edit(|draft| {
        draft.price = 8.0;
        draft.unit = RentalUnit::PerHour;
    });

    harness.form.submit().await;

    let accepted = harness.gateway.accepted().await;
    assert_eq!(accepted[0].unit, RentalUnit::PerHour);
    assert_eq!(accepted[0].price, 8.0);
}

#[tokio::test]
async fn test_availability_window_is_checked_against_the_clock() {
    let harness = ListingHarness::new();
    harness.fill_valid();

    // Jump the clock forward: the default window now starts in the past.
    harness
        .time
        .set_date(NaiveDate::from_ymd_opt(2024, 2, 1).expect("valid date"));

    let outcome = harness.form.submit().await;

    let SubmissionOutcome::Invalid(errors) = outcome else {
        panic!("Expected a date validation error");
    };
    assert!(errors.iter().any(|e| e.field == "available_from"));

    // Fixing the window makes the draft submittable again.
    harness.form.edit(|draft| {
        draft.available_from = NaiveDate::from_ymd_opt(2024, 2, 2).expect("valid date");
        draft.available_to = NaiveDate::from_ymd_opt(2024, 3, 2).expect("valid date");
    });
    let retry = harness.form.submit().await;
    assert!(matches!(retry, SubmissionOutcome::Accepted { .. }));
}

#[tokio::test]
async fn test_gateway_failure_preserves_the_draft_for_retry() {
    let harness = ListingHarness::new();
    harness.fill_valid();
    harness.gateway.set_fail_mode(true).await;

    let outcome = harness.form.submit().await;

    assert!(matches!(outcome, SubmissionOutcome::Failed(_)));
    assert!(matches!(
        harness.form.status(),
        SubmissionStatus::Failed { .. }
    ));
    assert_eq!(harness.draft().title, "Folding Kayak");
    assert_eq!(harness.gateway.accepted_count().await, 0);

    harness.gateway.set_fail_mode(false).await;
    let retry = harness.form.submit().await;
    assert!(matches!(retry, SubmissionOutcome::Accepted { .. }));
    assert_eq!(harness.gateway.accepted_count().await, 1);
}

#[tokio::test]
async fn test_double_submission_is_impossible() {
    let harness = ListingHarness::new();
    harness.fill_valid();
    harness.gateway.gate().hold().await;

    let in_flight = {
        let form = harness.form.clone();
        tokio::spawn(async move { form.submit().await })
    };
    while harness.form.status() != SubmissionStatus::Pending {
        tokio::task::yield_now().await;
    }

    assert_eq!(harness.form.submit().await, SubmissionOutcome::Busy);

    harness.gateway.gate().release().await;
    let outcome = in_flight.await.unwrap();
    assert!(matches!(outcome, SubmissionOutcome::Accepted { .. }));
    assert_eq!(
        harness.gateway.accepted_count().await,
        1,
        "The duplicate submit must not have been queued"
    );
}

#[tokio::test]
async fn test_image_cap_applies_through_the_form() {
    let harness = ListingHarness::new();
    harness.fill_valid();

    for i in 0..5 {
        assert!(harness.form.add_image(format!("img-{i}")));
    }
    assert!(!harness.form.add_image("img-5"));

    assert_eq!(harness.form.remove_image(0).as_deref(), Some("img-0"));
    assert!(harness.form.add_image("img-5"));
    assert_eq!(harness.draft().images.len(), 5);
}
