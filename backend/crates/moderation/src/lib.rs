//! Moderation Module
//!
//! Discussion threads attached to directory entities, gated on the
//! signed-in user from the account crate.
//!
//! Clean Architecture structure:
//! - `domain/` - Comment entity, value objects, comment board
//! - `application/` - Post/report/list use cases, config, gate facade
//!
//! ## Moderation Model
//! - Posting and reporting require a signed-in user
//! - `active --report--> flagged`; flagged is terminal
//! - Flagged content is replaced by a placeholder on the normal read path
//!   and kept for audit

pub mod application;
pub mod domain;
pub mod error;

// Re-exports for convenience
pub use application::{ModerationConfig, ModerationGate};
pub use error::{ModerationError, ModerationResult};

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

pub mod models {
    pub use crate::domain::board::CommentBoard;
    pub use crate::domain::entities::*;
    pub use crate::domain::value_objects::*;
}

#[cfg(test)]
mod tests;
