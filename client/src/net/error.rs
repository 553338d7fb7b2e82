//! Error types for REST and identity-provider calls.
//!
//! ERROR HANDLING
//! ==============
//! Neither type is ever seen by the access gate. Pages render them inline
//! through `Display`; the gate only observes "no user".

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Failure of a REST backend call.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("network error: {0}")]
    Network(String),

    /// The backend answered with a non-2xx status.
    #[error("request failed: {status}")]
    Status { status: u16 },

    /// The response body did not match the expected shape.
    #[error("unexpected response: {0}")]
    Decode(String),

    /// Browser-only call attempted during server rendering.
    #[error("not available on server")]
    Unavailable,
}

/// Failure of an identity-provider action.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    #[error("invalid email or password")]
    InvalidCredentials,

    #[error("an account with this email already exists")]
    EmailInUse,

    /// The provider could not be reached.
    #[error("identity provider unreachable: {0}")]
    Network(String),

    /// Any other provider-side failure, passed through opaquely.
    #[error("identity provider error: {0}")]
    Provider(String),
}

impl AuthError {
    /// Map a non-2xx identity response to an error.
    pub fn from_status(status: u16) -> Self {
        match status {
            401 | 403 => Self::InvalidCredentials,
            409 => Self::EmailInUse,
            other => Self::Provider(format!("status {other}")),
        }
    }
}
