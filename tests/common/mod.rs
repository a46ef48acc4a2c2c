
pub use harness::{ListingHarness, WizardHarness};
