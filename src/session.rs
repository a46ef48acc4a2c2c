//! Session state shared between the onboarding flow and the catalog.
//!
//! Completing or skipping the wizard sets the same authenticated gate; only
//! completion carries a profile. The rendering layer reads this handle to
//! decide whether to show the wizard or the catalog.

use std::sync::Arc;

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

use crate::config::DEFAULT_LOCATION;
use crate::wizard::Profile;

/// Navigation request emitted to the rendering layer, opaque to this core.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NavIntent {
    /// Show the product catalog.
    BrowseCatalog,
    /// Open the add-listing form.
    OpenListingForm,
}

#[derive(Debug)]
struct SessionInner {
    authenticated: bool,
    profile: Option<Profile>,
    location: String,
}

/// Cloneable handle to the per-user session.
#[derive(Debug, Clone)]
pub struct Session {
    inner: Arc<RwLock<SessionInner>>,
}

impl Session {
    /// Fresh, unauthenticated session at the given location.
    pub fn new(location: impl Into<String>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(SessionInner {
                authenticated: false,
                profile: None,
                location: location.into(),
            })),
        }
    }

    /// Whether the catalog is unlocked.
    pub fn is_authenticated(&self) -> bool {
        self.inner.read().authenticated
    }

    /// The onboarded profile, if the wizard completed (absent after skip).
    pub fn profile(&self) -> Option<Profile> {
        self.inner.read().profile.clone()
    }

    /// The location shown in the catalog header.
    pub fn location(&self) -> String {
        self.inner.read().location.clone()
    }

    /// Change the displayed location.
    pub fn set_location(&self, location: impl Into<String>) {
        self.inner.write().location = location.into();
    }

    /// Unlock the catalog with an onboarded profile.
    pub fn complete(&self, profile: Profile) {
        let mut inner = self.inner.write();
        inner.authenticated = true;
        inner.profile = Some(profile);
    }

    /// Unlock the catalog without a profile (login was skipped).
    pub fn skip(&self) {
        self.inner.write().authenticated = true;
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(DEFAULT_LOCATION)
    }
}
