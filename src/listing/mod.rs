//! Creating a new rental listing: draft editing, structural validation,
//! and hand-off to the submission gateway.

pub mod draft;
pub mod form;

pub use draft::{Category, ListingDraft, NewListing};
pub use form::{ListingForm, SubmissionOutcome, SubmissionStatus};
