//! Report Comment Use Case
//!
//! Any signed-in user may report any comment. Reporting moves the comment
//! to `Flagged`; reporting an already flagged comment changes nothing.

use std::sync::Arc;

use account::SessionContext;
use account::domain::repository::SessionStore;
use tokio::sync::RwLock;

use crate::domain::board::CommentBoard;
use crate::domain::value_objects::{CommentId, CommentStatus, ParentId};
use crate::error::{ModerationError, ModerationResult};

pub struct ReportCommentUseCase<S>
where
    S: SessionStore,
{
    session: Arc<SessionContext<S>>,
    board: Arc<RwLock<CommentBoard>>,
}

impl<S> ReportCommentUseCase<S>
where
    S: SessionStore,
{
    pub fn new(session: Arc<SessionContext<S>>, board: Arc<RwLock<CommentBoard>>) -> Self {
        Self { session, board }
    }

    pub async fn execute(
        &self,
        parent: ParentId,
        comment_id: CommentId,
    ) -> ModerationResult<CommentStatus> {
        let reporter = self
            .session
            .current_user()
            .await
            .ok_or(ModerationError::NoActiveSession)?;

        let mut board = self.board.write().await;
        let Some(comment) = board.find_mut(&parent, &comment_id) else {
            return Err(ModerationError::CommentNotFound { parent, comment_id });
        };

        if comment.flag() {
            tracing::info!(
                parent = %parent,
                comment_id = %comment_id,
                author_id = %comment.author.id,
                reporter_id = %reporter.id,
                "Comment flagged"
            );
        } else {
            tracing::debug!(comment_id = %comment_id, "Comment already flagged");
        }

        Ok(comment.status)
    }
}
