//! Business logic shared by the headless driver and the integration tests.

use tracing::info;

use crate::error::{RentError, RentResult};
use crate::session::Session;
use crate::traits::{AuthGateway, GeoResolver};
use crate::wizard::{Wizard, WizardStage};

/// Fold a finished wizard into the session.
///
/// Completion hands the accumulated profile to the session; a skip sets
/// the same authenticated gate with no profile. Returns whether the
/// session is now unlocked. Calling this while the wizard is still in
/// progress is a no-op.
pub fn apply_wizard_outcome<A, G>(session: &Session, wizard: &Wizard<A, G>) -> RentResult<bool>
where
    A: AuthGateway,
    G: GeoResolver,
{
    match wizard.stage() {
        WizardStage::Completed => {
            let profile = wizard.profile().ok_or_else(|| {
                RentError::InvalidState("completed wizard has no profile".to_string())
            })?;
            info!(name = %profile.name, "onboarding complete, unlocking session");
            session.complete(profile);
            Ok(true)
        }
        WizardStage::Skipped => {
            info!("login skipped, unlocking session without a profile");
            session.skip();
            Ok(true)
        }
        WizardStage::InProgress(_) => Ok(false),
    }
}
