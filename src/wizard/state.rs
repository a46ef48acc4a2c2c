use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A non-terminal stage of the onboarding flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WizardStep {
    /// Mobile number entry, federated login, or skip.
    MobileEntry,
    /// One-time code verification.
    OtpVerify,
    /// Display name and date of birth.
    ProfileEntry,
    /// Address entry with optional location lookup.
    AddressEntry,
}

impl WizardStep {
    /// 1-based position shown as "Step N of 4".
    pub const fn number(self) -> u8 {
        match self {
            Self::MobileEntry => 1,
            Self::OtpVerify => 2,
            Self::ProfileEntry => 3,
            Self::AddressEntry => 4,
        }
    }

    /// The step one position earlier, if any.
    pub const fn previous(self) -> Option<Self> {
        match self {
            Self::MobileEntry => None,
            Self::OtpVerify => Some(Self::MobileEntry),
            Self::ProfileEntry => Some(Self::OtpVerify),
            Self::AddressEntry => Some(Self::ProfileEntry),
        }
    }
}

/// Overall wizard progress: an in-progress step or a terminal outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WizardStage {
    InProgress(WizardStep),
    /// The flow finished; an accumulated profile is available.
    Completed,
    /// The flow was skipped from the first step; no profile exists.
    Skipped,
}

impl Default for WizardStage {
    fn default() -> Self {
        Self::InProgress(WizardStep::MobileEntry)
    }
}

impl WizardStage {
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Completed | Self::Skipped)
    }

    /// The current step, if the flow is still in progress.
    pub const fn step(self) -> Option<WizardStep> {
        match self {
            Self::InProgress(step) => Some(step),
            _ => None,
        }
    }
}

/// Field values accumulated while the wizard runs.
///
/// Values persist across back/forward navigation and across failed
/// retries; the draft is discarded with the wizard itself.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfileDraft {
    pub mobile: String,
    pub otp: String,
    pub name: String,
    pub dob: Option<NaiveDate>,
    pub address: String,
}

/// The profile emitted when the wizard completes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub mobile: String,
    pub name: String,
    pub dob: NaiveDate,
    pub address: String,
}
