//! The onboarding wizard: a strictly sequential four-step flow gating
//! access to the catalog, with simulated backend round trips.

pub mod machine;
pub mod state;

pub use machine::{StepOutcome, Wizard};
pub use state::{Profile, ProfileDraft, WizardStage, WizardStep};
