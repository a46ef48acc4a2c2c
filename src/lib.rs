//! Core logic for a peer-to-peer rental marketplace front-end: the
//! onboarding wizard state machine, the catalog filter/view engine, and
//! the new-listing form. All backend interactions go through injectable
//! gateway traits whose default implementations simulate fixed-latency,
//! always-successful round trips.

pub mod actions;
pub mod catalog;
pub mod config;
pub mod error;
pub mod listing;
pub mod session;
pub mod traits;
pub mod wizard;

#[cfg(any(test, feature = "test-support"))]
pub mod mocks;

pub use catalog::{
    build_view, distinct_brands, distinct_categories, filter, sample_products, CatalogView,
    CatalogViewState, FilterCriteria, Product, ProductBuilder, RentalUnit, Section, Selector,
};
pub use error::{FieldError, RentError, RentResult};
pub use listing::{Category, ListingDraft, ListingForm, NewListing, SubmissionOutcome, SubmissionStatus};
pub use session::{NavIntent, Session};
pub use traits::{
    AuthGateway, GeoResolver, ListingGateway, SimulatedAuthGateway, SimulatedGeoResolver,
    SimulatedListingGateway, SystemTimeProvider, TimeProvider,
};
pub use wizard::{Profile, ProfileDraft, StepOutcome, Wizard, WizardStage, WizardStep};
