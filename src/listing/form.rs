//! The listing form: a pending-guarded submission machine around a
//! [`ListingDraft`].

use std::sync::Arc;

use parking_lot::Mutex;
use serde::Serialize;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

use crate::error::FieldError;
use crate::traits::{ListingGateway, TimeProvider};

use super::draft::ListingDraft;

/// Submission status exposed to the rendering layer.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum SubmissionStatus {
    /// Nothing submitted yet (or the last attempt was cancelled).
    Idle,
    /// A submission is in flight; further submits are dropped.
    Pending,
    /// The gateway accepted the listing.
    Succeeded { id: String },
    /// The gateway rejected the listing; the draft is untouched.
    Failed { message: String },
}

/// Resolution of one submit attempt.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmissionOutcome {
    /// Accepted by the gateway; the draft has been reset.
    Accepted { id: String },
    /// A submission is already in flight; this one was dropped, not queued.
    Busy,
    /// Structural validation failed; nothing was submitted, nothing changed.
    Invalid(Vec<FieldError>),
    /// The gateway failed; the draft is preserved for a retry.
    Failed(String),
    /// The form was torn down while the submission was in flight.
    Cancelled,
}

#[derive(Debug)]
struct FormInner {
    draft: ListingDraft,
    status: SubmissionStatus,
}

/// Cloneable handle to one listing form.
#[derive(Clone)]
pub struct ListingForm<S: ListingGateway, T: TimeProvider> {
    gateway: S,
    time: T,
    inner: Arc<Mutex<FormInner>>,
    cancel: CancellationToken,
}

impl<S: ListingGateway, T: TimeProvider> ListingForm<S, T> {
    /// Open a fresh form with default field values.
    pub fn new(gateway: S, time: T) -> Self {
        Self::with_cancellation(gateway, time, CancellationToken::new())
    }

    /// Open a fresh form tied to an externally owned cancellation token.
    pub fn with_cancellation(gateway: S, time: T, cancel: CancellationToken) -> Self {
        let draft = ListingDraft::new(time.today_utc());
        Self {
            gateway,
            time,
            inner: Arc::new(Mutex::new(FormInner {
                draft,
                status: SubmissionStatus::Idle,
            })),
            cancel,
        }
    }

    /// Snapshot of the current draft.
    pub fn draft(&self) -> ListingDraft {
        self.inner.lock().draft.clone()
    }

    /// Current submission status.
    pub fn status(&self) -> SubmissionStatus {
        self.inner.lock().status.clone()
    }

    /// Token cancelling an in-flight submission when the owner tears down.
    pub fn cancellation_token(&self) -> CancellationToken {
        self.cancel.clone()
    }

    /// Edit the draft in place. Rejected (returns false) while a
    /// submission is in flight, so the submitted payload stays coherent.
    pub fn edit(&self, apply: impl FnOnce(&mut ListingDraft)) -> bool {
        let mut inner = self.inner.lock();
        if inner.status == SubmissionStatus::Pending {
            return false;
        }
        apply(&mut inner.draft);
        true
    }

    /// Attach an image reference. False while pending or once the cap is
    /// reached.
    pub fn add_image(&self, image: impl Into<String>) -> bool {
        let mut inner = self.inner.lock();
        if inner.status == SubmissionStatus::Pending {
            return false;
        }
        inner.draft.add_image(image)
    }

    /// Detach the image at the given position.
    pub fn remove_image(&self, index: usize) -> Option<String> {
        let mut inner = self.inner.lock();
        if inner.status == SubmissionStatus::Pending {
            return None;
        }
        inner.draft.remove_image(index)
    }

    /// Validate the draft and hand it to the gateway.
    ///
    /// On success the draft resets to a fresh one; on gateway failure the
    /// draft is preserved so the user can retry.
    pub async fn submit(&self) -> SubmissionOutcome {
        let payload = {
            let mut inner = self.inner.lock();
            if inner.status == SubmissionStatus::Pending {
                return SubmissionOutcome::Busy;
            }
            match inner.draft.finalize(self.time.today_utc()) {
                Err(errors) => return SubmissionOutcome::Invalid(errors),
                Ok(payload) => {
                    inner.status = SubmissionStatus::Pending;
                    payload
                }
            }
        };

        let result = tokio::select! {
            () = self.cancel.cancelled() => None,
            result = self.gateway.submit(&payload) => Some(result),
        };

        let mut inner = self.inner.lock();
        match result {
            None => {
                inner.status = SubmissionStatus::Idle;
                SubmissionOutcome::Cancelled
            }
            Some(Err(e)) => {
                let message = e.to_string();
                warn!(error = %message, "listing submission failed");
                inner.status = SubmissionStatus::Failed {
                    message: message.clone(),
                };
                SubmissionOutcome::Failed(message)
            }
            Some(Ok(id)) => {
                info!(id = %id, title = %payload.title, "listing accepted");
                inner.status = SubmissionStatus::Succeeded { id: id.clone() };
                inner.draft = ListingDraft::new(self.time.today_utc());
                SubmissionOutcome::Accepted { id }
            }
        }
    }
}
