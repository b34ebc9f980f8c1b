//! Confirmation errors

use super::RequestId;
use thiserror::Error;

/// Errors reported when resolving a confirmation
#[derive(Debug, Error)]
pub enum ConfirmError {
    /// The commit action of a confirmed request failed.
    ///
    /// The coordinator is already idle when this is returned.
    #[error("\"{title}\" could not be completed")]
    Callback {
        /// Request whose action failed
        id: RequestId,
        /// Title of that request
        title: String,
        /// Error returned by the action
        #[source]
        source: anyhow::Error,
    },
}

impl ConfirmError {
    /// Identifier of the request that produced this error
    #[must_use]
    pub const fn request_id(&self) -> RequestId {
        match self {
            Self::Callback { id, .. } => *id,
        }
    }
}
