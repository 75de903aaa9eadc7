//! Domain Entities

use account::models::{User, UserId};
use chrono::{DateTime, Utc};
use serde::Serialize;

use super::value_objects::{CommentId, CommentStatus, ParentId};

/// Author snapshot taken when the comment is posted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentAuthor {
    pub id: UserId,
    pub name: String,
    pub image: String,
}

impl From<&User> for CommentAuthor {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.clone(),
            name: user.name.clone(),
            image: user.image.clone(),
        }
    }
}

/// Comment entity
///
/// `content` is private: the normal read path goes through
/// [`Comment::display_content`], which hides flagged text. Moderators read
/// the original through [`Comment::audit_content`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub id: CommentId,
    pub parent_id: ParentId,
    pub author: CommentAuthor,
    content: String,
    /// Display label, e.g. "Just now" or "2 days ago"
    pub timestamp: String,
    pub posted_at: DateTime<Utc>,
    pub status: CommentStatus,
}

impl Comment {
    /// Create a fresh active comment
    pub fn new(
        parent_id: ParentId,
        author: CommentAuthor,
        content: impl Into<String>,
        timestamp: impl Into<String>,
    ) -> Self {
        Self {
            id: CommentId::new(),
            parent_id,
            author,
            content: content.into(),
            timestamp: timestamp.into(),
            posted_at: Utc::now(),
            status: CommentStatus::Active,
        }
    }

    /// Same comment with a different status, for seeding fixture threads
    pub fn with_status(mut self, status: CommentStatus) -> Self {
        self.status = status;
        self
    }

    /// Original text regardless of status
    pub fn audit_content(&self) -> &str {
        &self.content
    }

    /// Text for the normal read path
    pub fn display_content<'a>(&'a self, placeholder: &'a str) -> &'a str {
        match self.status {
            CommentStatus::Active => &self.content,
            CommentStatus::Flagged => placeholder,
        }
    }

    pub fn is_flagged(&self) -> bool {
        self.status.is_flagged()
    }

    /// Move to `Flagged`. Returns whether the status changed.
    pub fn flag(&mut self) -> bool {
        if self.is_flagged() {
            return false;
        }
        self.status = CommentStatus::Flagged;
        true
    }

    pub fn view(&self, placeholder: &str) -> CommentView {
        CommentView {
            id: self.id,
            parent_id: self.parent_id.clone(),
            author_name: self.author.name.clone(),
            author_image: self.author.image.clone(),
            content: self.display_content(placeholder).to_string(),
            timestamp: self.timestamp.clone(),
            status: self.status,
        }
    }
}

/// Read model handed to the UI
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentView {
    pub id: CommentId,
    pub parent_id: ParentId,
    pub author_name: String,
    pub author_image: String,
    pub content: String,
    pub timestamp: String,
    pub status: CommentStatus,
}
