//! Account Error Types
//!
//! This module provides account-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use kernel::error::{app_error::AppError, kind::ErrorKind};
use platform::storage::StorageError;
use thiserror::Error;

/// Account-specific result type alias
pub type AccountResult<T> = Result<T, AccountError>;

/// Account-specific error variants
#[derive(Debug, Error)]
pub enum AccountError {
    /// Email is on the ban list, or the account is suspended
    #[error("This account has been suspended")]
    AccountSuspended,

    /// Mutation attempted while signed out
    #[error("No active session")]
    NoActiveSession,

    /// Stored session record could not be parsed
    #[error("Persisted record is malformed: {0}")]
    MalformedPersistedRecord(String),

    /// Caller input rejected
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Storage backend failed
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// Record could not be encoded
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AccountError {
    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            AccountError::AccountSuspended => ErrorKind::Forbidden,
            AccountError::NoActiveSession => ErrorKind::Unauthenticated,
            AccountError::InvalidInput(_) => ErrorKind::InvalidInput,
            AccountError::MalformedPersistedRecord(_) | AccountError::Storage(_) => {
                ErrorKind::Storage
            }
            AccountError::Serialization(_) | AccountError::Internal(_) => ErrorKind::Internal,
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        let err = AppError::new(self.kind(), self.to_string());
        match self {
            AccountError::AccountSuspended => {
                err.with_action("Please contact support if you believe this is a mistake")
            }
            AccountError::NoActiveSession => err.with_action("Please sign in to continue"),
            _ => err,
        }
    }

    /// Log the error with appropriate level
    pub(crate) fn log(&self) {
        match self {
            AccountError::Storage(e) => {
                tracing::error!(error = %e, "Account storage error");
            }
            AccountError::Serialization(e) => {
                tracing::error!(error = %e, "Account serialization error");
            }
            AccountError::Internal(msg) => {
                tracing::error!(message = %msg, "Account internal error");
            }
            AccountError::MalformedPersistedRecord(detail) => {
                tracing::warn!(detail = %detail, "Discarding malformed persisted record");
            }
            AccountError::AccountSuspended => {
                tracing::warn!("Sign-in attempt on suspended account");
            }
            _ => {
                tracing::debug!(error = %self, "Account error");
            }
        }
    }
}

impl From<AccountError> for AppError {
    fn from(err: AccountError) -> Self {
        err.log();
        let app = err.to_app_error();
        match err {
            AccountError::Storage(e) => app.with_source(e),
            AccountError::Serialization(e) => app.with_source(e),
            _ => app,
        }
    }
}
