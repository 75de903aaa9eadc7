//! Error Kind - Classification of errors
//!
//! Defines the [`ErrorKind`] enum that the UI layer uses to decide how a
//! failure is presented.

use serde::Serialize;

/// Error classification
///
/// Every failure in this engine is local and recoverable; the kind only
/// tells the caller what sort of message to show and whether retrying the
/// same call can help.
///
/// ## Examples
/// ```rust
/// use kernel::error::kind::ErrorKind;
///
/// let kind = ErrorKind::Forbidden;
/// assert_eq!(kind.as_str(), "Forbidden");
/// assert!(!kind.is_retryable());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[non_exhaustive]
pub enum ErrorKind {
    /// Caller supplied unusable input
    InvalidInput,
    /// Operation needs a signed-in user
    Unauthenticated,
    /// Identity is known but not allowed to proceed
    Forbidden,
    /// Referenced record does not exist
    NotFound,
    /// Durable storage failed
    Storage,
    /// Bug or unexpected condition
    Internal,
}

impl ErrorKind {
    /// Human readable name of the kind
    ///
    /// ## Examples
    /// ```rust
    /// use kernel::error::kind::ErrorKind;
    /// assert_eq!(ErrorKind::InvalidInput.as_str(), "Invalid Input");
    /// ```
    #[inline]
    pub const fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::InvalidInput => "Invalid Input",
            ErrorKind::Unauthenticated => "Unauthenticated",
            ErrorKind::Forbidden => "Forbidden",
            ErrorKind::NotFound => "Not Found",
            ErrorKind::Storage => "Storage",
            ErrorKind::Internal => "Internal",
        }
    }

    /// Whether the same call may succeed if simply retried
    ///
    /// Only storage hiccups qualify; everything else needs different input
    /// or a different session state.
    #[inline]
    pub const fn is_retryable(&self) -> bool {
        matches!(self, ErrorKind::Storage)
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_as_str() {
        assert_eq!(ErrorKind::Unauthenticated.as_str(), "Unauthenticated");
        assert_eq!(ErrorKind::NotFound.to_string(), "Not Found");
    }

    #[test]
    fn test_is_retryable() {
        assert!(ErrorKind::Storage.is_retryable());
        assert!(!ErrorKind::Forbidden.is_retryable());
        assert!(!ErrorKind::Internal.is_retryable());
    }

    #[test]
    fn test_serialize_screaming_snake() {
        let json = serde_json::to_string(&ErrorKind::InvalidInput).unwrap();
        assert_eq!(json, "\"INVALID_INPUT\"");
    }
}
