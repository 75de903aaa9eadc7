//! Email Value Object
//!
//! Sign-in is simulated, so any input is accepted. The value is normalized
//! (trimmed, NFKC, lowercased) so role heuristics and ban checks are
//! case-insensitive.

use serde::{Deserialize, Deserializer, Serialize};
use unicode_normalization::UnicodeNormalization;

/// Email address value object
///
/// Serializes as a plain string. Deserializing normalizes, so records
/// written with mixed case compare equal to fresh input.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Email(String);

impl Email {
    /// Normalize raw user input. Never fails.
    pub fn new(raw: &str) -> Self {
        Self(Self::normalize(raw))
    }

    fn normalize(raw: &str) -> String {
        raw.trim().nfkc().collect::<String>().to_lowercase()
    }

    /// Compare against another raw address using the same normalization
    pub fn matches(&self, raw: &str) -> bool {
        self.0 == Self::normalize(raw)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Handle before the first `@`, or the whole value when there is none
    pub fn local_part(&self) -> &str {
        self.0.split('@').next().unwrap_or("")
    }

    /// Everything after the first `@`, empty when there is none
    pub fn domain(&self) -> &str {
        self.0.split_once('@').map(|(_, domain)| domain).unwrap_or("")
    }

    pub fn is_blank(&self) -> bool {
        self.0.is_empty()
    }
}

impl std::fmt::Display for Email {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl<'de> Deserialize<'de> for Email {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::new(&raw))
    }
}

impl AsRef<str> for Email {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
