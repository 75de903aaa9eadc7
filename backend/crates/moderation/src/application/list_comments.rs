//! List Comments Use Case

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::application::config::ModerationConfig;
use crate::domain::board::CommentBoard;
use crate::domain::entities::CommentView;
use crate::domain::value_objects::ParentId;

/// Newest-first thread with flagged content replaced by the placeholder.
/// Reading needs no session.
pub struct ListCommentsUseCase {
    board: Arc<RwLock<CommentBoard>>,
    config: Arc<ModerationConfig>,
}

impl ListCommentsUseCase {
    pub fn new(board: Arc<RwLock<CommentBoard>>, config: Arc<ModerationConfig>) -> Self {
        Self { board, config }
    }

    pub async fn execute(&self, parent: &ParentId) -> Vec<CommentView> {
        self.board
            .read()
            .await
            .thread(parent)
            .iter()
            .map(|c| c.view(&self.config.placeholder))
            .collect()
    }
}
