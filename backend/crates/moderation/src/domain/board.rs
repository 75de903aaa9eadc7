//! Comment Board
//!
//! Threads keyed by parent entity, newest first.

use std::collections::HashMap;

use super::entities::Comment;
use super::value_objects::{CommentId, ParentId};

#[derive(Debug, Clone, Default)]
pub struct CommentBoard {
    threads: HashMap<ParentId, Vec<Comment>>,
}

impl CommentBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append fixture comments to a thread, keeping the given order.
    /// Fixtures are expected newest first.
    pub fn seed(&mut self, parent: ParentId, comments: impl IntoIterator<Item = Comment>) {
        self.threads.entry(parent).or_default().extend(comments);
    }

    /// Put a new comment at the head of its parent's thread
    pub fn prepend(&mut self, comment: Comment) {
        self.threads
            .entry(comment.parent_id.clone())
            .or_default()
            .insert(0, comment);
    }

    pub fn thread(&self, parent: &ParentId) -> &[Comment] {
        self.threads.get(parent).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn find(&self, parent: &ParentId, id: &CommentId) -> Option<&Comment> {
        self.thread(parent).iter().find(|c| c.id == *id)
    }

    pub fn find_mut(&mut self, parent: &ParentId, id: &CommentId) -> Option<&mut Comment> {
        self.threads
            .get_mut(parent)
            .and_then(|thread| thread.iter_mut().find(|c| c.id == *id))
    }

    /// Total comments across all threads
    pub fn len(&self) -> usize {
        self.threads.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::fixtures::comment;

    #[test]
    fn test_prepend_puts_newest_first() {
        let mut board = CommentBoard::new();
        let older = comment("biz-1", "first");
        let newer = comment("biz-1", "second");
        board.prepend(older.clone());
        board.prepend(newer.clone());

        let thread = board.thread(&ParentId::new("biz-1"));
        assert_eq!(thread, &[newer, older]);
    }

    #[test]
    fn test_seed_keeps_order_and_appends() {
        let mut board = CommentBoard::new();
        let a = comment("biz-1", "a");
        let b = comment("biz-1", "b");
        board.seed(ParentId::new("biz-1"), vec![a.clone(), b.clone()]);

        assert_eq!(board.thread(&ParentId::new("biz-1")), &[a, b]);
        assert_eq!(board.len(), 2);
    }

    #[test]
    fn test_threads_are_separate() {
        let mut board = CommentBoard::new();
        let c = comment("biz-1", "hello");
        board.prepend(c.clone());

        assert!(board.thread(&ParentId::new("biz-2")).is_empty());
        assert!(board.find(&ParentId::new("biz-2"), &c.id).is_none());
        assert!(board.find(&ParentId::new("biz-1"), &c.id).is_some());
    }

    #[test]
    fn test_find_mut_flags_in_place() {
        let mut board = CommentBoard::new();
        let c = comment("biz-1", "hello");
        let parent = c.parent_id.clone();
        board.prepend(c.clone());

        assert!(board.find_mut(&parent, &c.id).unwrap().flag());
        assert!(board.find(&parent, &c.id).unwrap().is_flagged());
    }

    #[test]
    fn test_empty_board() {
        let board = CommentBoard::new();
        assert!(board.is_empty());
        assert!(board.thread(&ParentId::new("x")).is_empty());
    }
}
