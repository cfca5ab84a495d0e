//! Client error taxonomy

use atrium_ingress::DecodeError;

/// Errors from the data-access collaborator
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// Transport-level failure (connection refused, TLS, DNS)
    #[error("transport error: {0}")]
    Http(#[source] reqwest::Error),

    /// The single attempt exceeded the configured timeout
    #[error("request timed out")]
    Timeout,

    /// Backend answered with a non-success status
    ///
    /// `message` is recovered from the failure payload at the ingress
    /// boundary, falling back to the HTTP reason phrase.
    #[error("backend returned {code}: {message}")]
    Status {
        /// HTTP status code
        code: u16,
        /// Human-readable message
        message: String,
    },

    /// Successful response that failed to normalize
    #[error("response failed to decode: {0}")]
    Decode(#[from] DecodeError),

    /// Draft payload failed to serialize
    #[error("payload serialization failed: {0}")]
    Payload(#[from] serde_json::Error),
}

impl ClientError {
    /// Fold a reqwest error into the taxonomy
    #[must_use]
    pub fn from_transport(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout
        } else {
            Self::Http(err)
        }
    }

    /// Message suitable for a user-facing notice
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Http(_) => "could not reach the server".to_string(),
            Self::Timeout => "the server took too long to respond".to_string(),
            Self::Status { message, .. } => message.clone(),
            Self::Decode(_) => "the server sent an unexpected response".to_string(),
            Self::Payload(_) => "the form could not be submitted".to_string(),
        }
    }
}
