//! Operation notices

/// User-facing outcome of one operation, the toast equivalent
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// The operation completed
    Success(String),
    /// The operation failed
    Error(String),
}

impl Notice {
    /// Success notice
    #[inline]
    #[must_use]
    pub fn success(message: impl Into<String>) -> Self {
        Self::Success(message.into())
    }

    /// Error notice
    #[inline]
    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self::Error(message.into())
    }

    /// The message text
    #[inline]
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::Success(message) | Self::Error(message) => message,
        }
    }

    /// Whether this notice reports a failure
    #[inline]
    #[must_use]
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }
}
