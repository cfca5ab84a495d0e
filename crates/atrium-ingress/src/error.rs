//! Decode errors raised at the ingress boundary

/// Errors produced while normalizing a backend payload
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    /// Payload matched none of the known envelope shapes
    #[error("unrecognized envelope: expected a list or record payload")]
    UnrecognizedEnvelope,

    /// A required field was absent under every known alias
    #[error("missing field: {field}")]
    MissingField {
        /// Canonical field name
        field: String,
    },

    /// A field was present but could not be interpreted
    #[error("invalid field {field}: {reason}")]
    InvalidField {
        /// Canonical field name
        field: String,
        /// Why the value was rejected
        reason: String,
    },

    /// A record inside a list envelope failed to decode
    ///
    /// A malformed record fails the whole decode rather than being silently
    /// dropped; partial lists hide backend regressions.
    #[error("record {index} failed to decode: {source}")]
    Record {
        /// Position of the record in the list
        index: usize,
        /// Underlying field error
        #[source]
        source: Box<DecodeError>,
    },
}

impl DecodeError {
    /// Missing-field constructor
    #[inline]
    #[must_use]
    pub fn missing(field: impl Into<String>) -> Self {
        Self::MissingField {
            field: field.into(),
        }
    }

    /// Invalid-field constructor
    #[inline]
    #[must_use]
    pub fn invalid(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidField {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Wrap a field error with the list position it occurred at
    #[inline]
    #[must_use]
    pub fn at_index(self, index: usize) -> Self {
        Self::Record {
            index,
            source: Box::new(self),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_field() {
        let err = DecodeError::missing("siteId");
        assert!(err.to_string().contains("siteId"));
    }

    #[test]
    fn record_error_wraps_position() {
        let err = DecodeError::invalid("role", "unknown staff role: owner").at_index(3);
        let text = err.to_string();
        assert!(text.contains("record 3"));
        assert!(text.contains("role"));
    }
}
