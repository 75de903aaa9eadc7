//! Post Comment Use Case

use std::sync::Arc;

use account::SessionContext;
use account::domain::repository::SessionStore;
use tokio::sync::RwLock;

use crate::application::config::ModerationConfig;
use crate::domain::board::CommentBoard;
use crate::domain::entities::{Comment, CommentAuthor, CommentView};
use crate::domain::value_objects::ParentId;
use crate::error::{ModerationError, ModerationResult};

#[derive(Debug, Clone)]
pub struct PostCommentInput {
    pub parent: ParentId,
    pub content: String,
}

pub struct PostCommentUseCase<S>
where
    S: SessionStore,
{
    session: Arc<SessionContext<S>>,
    board: Arc<RwLock<CommentBoard>>,
    config: Arc<ModerationConfig>,
}

impl<S> PostCommentUseCase<S>
where
    S: SessionStore,
{
    pub fn new(
        session: Arc<SessionContext<S>>,
        board: Arc<RwLock<CommentBoard>>,
        config: Arc<ModerationConfig>,
    ) -> Self {
        Self {
            session,
            board,
            config,
        }
    }

    pub async fn execute(&self, input: PostCommentInput) -> ModerationResult<CommentView> {
        let author = self
            .session
            .current_user()
            .await
            .ok_or(ModerationError::NoActiveSession)?;

        let content = input.content.trim();
        if content.is_empty() {
            return Err(ModerationError::EmptyComment);
        }

        let comment = Comment::new(
            input.parent,
            CommentAuthor::from(&author),
            content,
            self.config.fresh_timestamp_label.clone(),
        );
        let view = comment.view(&self.config.placeholder);

        self.board.write().await.prepend(comment);

        tracing::info!(
            parent = %view.parent_id,
            comment_id = %view.id,
            author_id = %author.id,
            "Comment posted"
        );

        Ok(view)
    }
}
