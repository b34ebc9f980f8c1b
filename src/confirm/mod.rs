//! Single-slot confirmation coordinator
//!
//! Any screen can ask for a confirmation through a [`Confirmer`]; exactly one
//! render surface reads the pending request through
//! [`ConfirmCoordinator::view`] and reports the user's decision back through
//! [`ConfirmCoordinator::resolve`].
//!
//! At most one request is pending at a time. Showing a new request while one
//! is pending replaces it and drops the replaced request's commit action
//! without running it.

mod error;
mod request;

pub use error::ConfirmError;
pub use request::{ConfirmRequest, ConfirmView, OnConfirm, RequestId, Variant};

use std::fmt;
use tracing::{debug, info, warn};

/// The user's decision on the pending request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Run the commit action
    Confirmed,
    /// Discard the request
    Cancelled,
}

/// What `resolve` did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// The request's commit action ran and succeeded
    Confirmed {
        /// The resolved request
        id: RequestId,
    },
    /// The request was discarded without running its action
    Cancelled {
        /// The resolved request
        id: RequestId,
    },
    /// Nothing was pending
    Idle,
}

/// Button labels used when a request does not set its own
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Labels {
    /// Default confirm label
    pub confirm_text: String,
    /// Default cancel label
    pub cancel_text: String,
}

impl Default for Labels {
    fn default() -> Self {
        Self {
            confirm_text: "OK".to_string(),
            cancel_text: "Cancel".to_string(),
        }
    }
}

/// Holds the one confirmation currently owed to the user, if any.
///
/// `C` is the host context passed to commit actions on confirmation.
pub struct ConfirmCoordinator<C> {
    pending: Option<ConfirmRequest<C>>,
    labels: Labels,
}

impl<C> ConfirmCoordinator<C> {
    /// Create an idle coordinator with the built-in default labels
    #[must_use]
    pub fn new() -> Self {
        Self::with_labels(Labels::default())
    }

    /// Create an idle coordinator with custom default labels
    #[must_use]
    pub const fn with_labels(labels: Labels) -> Self {
        Self {
            pending: None,
            labels,
        }
    }

    /// Show a confirmation, replacing any request that is still pending.
    ///
    /// A replaced request is dropped; its commit action never runs.
    pub fn show(&mut self, request: ConfirmRequest<C>) {
        debug!(
            id = %request.id(),
            title = request.title(),
            variant = request.style().label(),
            "Showing confirmation"
        );
        if let Some(replaced) = self.pending.replace(request) {
            info!(
                id = %replaced.id(),
                title = replaced.title(),
                "Pending confirmation replaced before it was resolved"
            );
        }
    }

    /// Apply the user's decision and return to idle.
    ///
    /// The pending request is taken out of the slot before its commit action
    /// runs, so the coordinator is idle even if the action fails or panics.
    /// Resolving while idle does nothing.
    ///
    /// # Errors
    ///
    /// Returns [`ConfirmError::Callback`] if the confirmed request's commit
    /// action fails.
    pub fn resolve(&mut self, outcome: Outcome, ctx: &mut C) -> Result<Resolution, ConfirmError> {
        let Some(request) = self.pending.take() else {
            debug!(?outcome, "Resolve with no pending confirmation");
            return Ok(Resolution::Idle);
        };

        match outcome {
            Outcome::Cancelled => {
                debug!(id = %request.id(), title = request.title(), "Confirmation cancelled");
                Ok(Resolution::Cancelled { id: request.id() })
            }
            Outcome::Confirmed => {
                let (id, title, on_confirm) = request.into_commit();
                debug!(%id, title = %title, "Confirmation accepted");
                match on_confirm(ctx) {
                    Ok(()) => Ok(Resolution::Confirmed { id }),
                    Err(source) => {
                        warn!(%id, title = %title, error = %source, "Confirmed action failed");
                        Err(ConfirmError::Callback { id, title, source })
                    }
                }
            }
        }
    }

    /// Whether a confirmation is currently shown
    #[must_use]
    pub const fn is_visible(&self) -> bool {
        self.pending.is_some()
    }

    /// Identifier of the pending request
    #[must_use]
    pub fn pending_id(&self) -> Option<RequestId> {
        self.pending.as_ref().map(ConfirmRequest::id)
    }

    /// Snapshot of the pending request for rendering
    #[must_use]
    pub fn view(&self) -> Option<ConfirmView<'_>> {
        self.pending.as_ref().map(|request| ConfirmView {
            title: request.title(),
            message: request.message(),
            confirm_text: request
                .confirm_label()
                .unwrap_or(self.labels.confirm_text.as_str()),
            cancel_text: request
                .cancel_label()
                .unwrap_or(self.labels.cancel_text.as_str()),
            variant: request.style(),
        })
    }

    /// Default labels in effect
    #[must_use]
    pub const fn labels(&self) -> &Labels {
        &self.labels
    }

    /// Caller-side handle that can only show requests
    pub const fn confirmer(&mut self) -> Confirmer<'_, C> {
        Confirmer { coordinator: self }
    }
}

impl<C> Default for ConfirmCoordinator<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> fmt::Debug for ConfirmCoordinator<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConfirmCoordinator")
            .field("pending", &self.pending)
            .field("labels", &self.labels)
            .finish()
    }
}

/// Narrow handle given to screens that need to ask for confirmation.
///
/// It cannot read or resolve the pending request.
pub struct Confirmer<'a, C> {
    coordinator: &'a mut ConfirmCoordinator<C>,
}

impl<C> Confirmer<'_, C> {
    /// Show a confirmation, replacing any pending one
    pub fn show(&mut self, request: ConfirmRequest<C>) {
        self.coordinator.show(request);
    }
}

impl<C> fmt::Debug for Confirmer<'_, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Confirmer")
            .field("visible", &self.coordinator.is_visible())
            .finish()
    }
}
