//! Moderation Error Types
//!
//! This module provides moderation-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

use crate::domain::value_objects::{CommentId, ParentId};

/// Moderation-specific result type alias
pub type ModerationResult<T> = Result<T, ModerationError>;

#[derive(Debug, Error)]
pub enum ModerationError {
    /// Posting or reporting while signed out
    #[error("No active session")]
    NoActiveSession,

    /// No comment with this id under the given parent
    #[error("Comment {comment_id} not found under {parent}")]
    CommentNotFound {
        parent: ParentId,
        comment_id: CommentId,
    },

    /// Comment body is blank
    #[error("Comment cannot be empty")]
    EmptyComment,
}

impl ModerationError {
    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            ModerationError::NoActiveSession => ErrorKind::Unauthenticated,
            ModerationError::CommentNotFound { .. } => ErrorKind::NotFound,
            ModerationError::EmptyComment => ErrorKind::InvalidInput,
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        let err = AppError::new(self.kind(), self.to_string());
        match self {
            ModerationError::NoActiveSession => {
                err.with_action("Please sign in to join the discussion")
            }
            _ => err,
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            ModerationError::CommentNotFound { parent, comment_id } => {
                tracing::warn!(parent = %parent, comment_id = %comment_id, "Report for unknown comment");
            }
            _ => {
                tracing::debug!(error = %self, "Moderation error");
            }
        }
    }
}

impl From<ModerationError> for AppError {
    fn from(err: ModerationError) -> Self {
        err.log();
        err.to_app_error()
    }
}
