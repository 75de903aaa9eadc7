//! Moderation Gate
//!
//! Facade over the comment board. Shares the account crate's session
//! context to find out who is signed in; never mutates it.

use std::sync::Arc;

use account::SessionContext;
use account::domain::repository::SessionStore;
use tokio::sync::RwLock;

use crate::application::config::ModerationConfig;
use crate::application::list_comments::ListCommentsUseCase;
use crate::application::post_comment::{PostCommentInput, PostCommentUseCase};
use crate::application::report_comment::ReportCommentUseCase;
use crate::domain::board::CommentBoard;
use crate::domain::entities::{Comment, CommentView};
use crate::domain::value_objects::{CommentId, CommentStatus, ParentId};
use crate::error::ModerationResult;

pub struct ModerationGate<S>
where
    S: SessionStore,
{
    session: Arc<SessionContext<S>>,
    board: Arc<RwLock<CommentBoard>>,
    config: Arc<ModerationConfig>,
}

impl<S> ModerationGate<S>
where
    S: SessionStore,
{
    pub fn new(session: Arc<SessionContext<S>>, config: ModerationConfig) -> Self {
        Self::with_board(session, CommentBoard::new(), config)
    }

    /// Start from a pre-seeded board
    pub fn with_board(
        session: Arc<SessionContext<S>>,
        board: CommentBoard,
        config: ModerationConfig,
    ) -> Self {
        Self {
            session,
            board: Arc::new(RwLock::new(board)),
            config: Arc::new(config),
        }
    }

    pub fn config(&self) -> &ModerationConfig {
        &self.config
    }

    pub async fn post_comment(
        &self,
        parent: impl Into<ParentId>,
        content: impl Into<String>,
    ) -> ModerationResult<CommentView> {
        PostCommentUseCase::new(
            Arc::clone(&self.session),
            Arc::clone(&self.board),
            Arc::clone(&self.config),
        )
        .execute(PostCommentInput {
            parent: parent.into(),
            content: content.into(),
        })
        .await
    }

    pub async fn report_comment(
        &self,
        parent: impl Into<ParentId>,
        comment_id: CommentId,
    ) -> ModerationResult<CommentStatus> {
        ReportCommentUseCase::new(Arc::clone(&self.session), Arc::clone(&self.board))
            .execute(parent.into(), comment_id)
            .await
    }

    pub async fn list_comments(&self, parent: impl Into<ParentId>) -> Vec<CommentView> {
        ListCommentsUseCase::new(Arc::clone(&self.board), Arc::clone(&self.config))
            .execute(&parent.into())
            .await
    }

    /// Full record including the original content, for moderators
    pub async fn audit_comment(
        &self,
        parent: impl Into<ParentId>,
        comment_id: CommentId,
    ) -> Option<Comment> {
        self.board
            .read()
            .await
            .find(&parent.into(), &comment_id)
            .cloned()
    }
}
