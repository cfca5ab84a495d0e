//! Access errors

use thiserror::Error;

/// Failure while answering a capability question
///
/// A *denied* capability is not an error; it is the `false` answer. Errors
/// here mean the question itself could not be answered.
#[derive(Debug, Error)]
pub enum AccessError {
    /// The provider could not reach its policy source
    #[error("capability provider unavailable: {0}")]
    ProviderUnavailable(String),

    /// The role is unknown to the policy source
    #[error("unknown role: {0}")]
    UnknownRole(String),
}
