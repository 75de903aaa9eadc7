//! Domain Value Objects

use derive_more::Display;
use serde::{Deserialize, Serialize};

pub use kernel::id::CommentId;

/// Lifecycle state of a comment. `Flagged` is terminal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[serde(rename_all = "lowercase")]
pub enum CommentStatus {
    #[default]
    #[display("active")]
    Active,
    #[display("flagged")]
    Flagged,
}

impl CommentStatus {
    pub fn is_flagged(&self) -> bool {
        matches!(self, CommentStatus::Flagged)
    }
}

/// Id of the directory entity a thread hangs off (a business, a listing)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[serde(transparent)]
pub struct ParentId(String);

impl ParentId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ParentId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for ParentId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_default_and_display() {
        assert_eq!(CommentStatus::default(), CommentStatus::Active);
        assert_eq!(CommentStatus::Flagged.to_string(), "flagged");
        assert!(CommentStatus::Flagged.is_flagged());
        assert!(!CommentStatus::Active.is_flagged());
    }

    #[test]
    fn test_parent_id_conversions() {
        assert_eq!(ParentId::from("biz-7"), ParentId::new("biz-7".to_string()));
        assert_eq!(ParentId::from("biz-7").to_string(), "biz-7");
    }
}
