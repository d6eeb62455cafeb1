//! Error taxonomy for orchestrated operations.
//!
//! Every error is terminal for the triggering action: nothing is retried,
//! and the session returns to its pre-action state.

use aero_core::ValidationError;
use aero_sdk::SdkError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SessionError {
    /// Caught client-side before any network call
    #[error("{0}")]
    Validation(#[from] ValidationError),
    /// Service rejection (quota, authorization, field-level), verbatim
    #[error("{0}")]
    Denied(String),
    /// Generic connectivity failure, distinct from a rejection
    #[error("could not reach the service")]
    Transport,
    #[error("no such surface: {0}")]
    UnknownSurface(String),
    #[error("no surfaces defined for airport: {0}")]
    UnknownAirport(String),
}

impl From<SdkError> for SessionError {
    fn from(err: SdkError) -> Self {
        match err {
            SdkError::Service { detail, .. } => SessionError::Denied(detail),
            SdkError::Transport(_) => SessionError::Transport,
            SdkError::NotAuthenticated => SessionError::Denied("not logged in".to_string()),
        }
    }
}
