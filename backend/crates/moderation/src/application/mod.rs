//! Application Layer
//!
//! Use cases and the gate facade.

pub mod config;
pub mod gate;
pub mod list_comments;
pub mod post_comment;
pub mod report_comment;

// Re-exports
pub use config::ModerationConfig;
pub use gate::ModerationGate;
pub use list_comments::ListCommentsUseCase;
pub use post_comment::{PostCommentInput, PostCommentUseCase};
pub use report_comment::ReportCommentUseCase;
