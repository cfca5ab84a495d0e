//! Top-level console errors

use atrium_access::{AccessError, Action, Role};
use atrium_client::{ClientError, Resource};
use atrium_forms::ValidationReport;
use atrium_ingress::DecodeError;
use thiserror::Error;

/// Everything a console operation can fail with
///
/// Validation failures never reach the network; backend failures surface the
/// message recovered at the ingress boundary; permission failures are
/// proactive denials, not backend rejections.
#[derive(Debug, Error)]
pub enum ConsoleError {
    /// The draft failed validation; nothing was sent
    #[error("validation failed: {0}")]
    Validation(ValidationReport),

    /// The data-access collaborator failed
    #[error(transparent)]
    Backend(#[from] ClientError),

    /// A payload failed to normalize at the ingress boundary
    #[error(transparent)]
    Decode(#[from] DecodeError),

    /// The capability check answered no
    #[error("{role} may not {action} {resource}")]
    PermissionDenied {
        /// Role that asked
        role: Role,
        /// Action that was refused
        action: Action,
        /// Resource the action targeted
        resource: Resource,
    },

    /// The capability provider could not answer
    #[error(transparent)]
    Access(#[from] AccessError),

    /// Configuration could not be loaded or is invalid
    #[error("configuration error: {0}")]
    Config(String),
}

impl ConsoleError {
    /// Message suitable for a user-facing notice
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Validation(report) => report.to_string(),
            Self::Backend(err) => err.user_message(),
            Self::Decode(_) => "the server sent an unexpected response".to_string(),
            Self::PermissionDenied { action, resource, .. } => {
                format!("you do not have permission to {action} {resource}")
            }
            Self::Access(_) => "permissions are temporarily unavailable".to_string(),
            Self::Config(message) => message.clone(),
        }
    }
}
