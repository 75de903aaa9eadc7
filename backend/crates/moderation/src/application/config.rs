//! Application Configuration

/// Text shown in place of a flagged comment
pub const DEFAULT_PLACEHOLDER: &str = "This comment has been flagged for review.";

/// Timestamp label given to a comment at posting time
pub const DEFAULT_FRESH_TIMESTAMP_LABEL: &str = "Just now";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModerationConfig {
    pub placeholder: String,
    pub fresh_timestamp_label: String,
}

impl Default for ModerationConfig {
    fn default() -> Self {
        Self {
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
            fresh_timestamp_label: DEFAULT_FRESH_TIMESTAMP_LABEL.to_string(),
        }
    }
}
