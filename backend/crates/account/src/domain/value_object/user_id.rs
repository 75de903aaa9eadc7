//! UserId Value Object
//!
//! Opaque identifier. Registered users get a 21-character nanoid; the two
//! demo fixture accounts use fixed sentinel values.

use nid::Nanoid;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Sentinel id of the demo vendor. This account owns the pre-seeded
/// business record.
pub const VENDOR_OWNER_ID: &str = "1";

/// Sentinel id of the demo admin
pub const ADMIN_ID: &str = "admin";

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    /// Fresh random id
    pub fn generate() -> Self {
        let id: Nanoid = Nanoid::new();
        Self(id.as_str().to_string())
    }

    pub fn vendor_owner() -> Self {
        Self(VENDOR_OWNER_ID.to_string())
    }

    pub fn admin() -> Self {
        Self(ADMIN_ID.to_string())
    }

    /// Wrap an id read back from storage or a fixture
    pub fn from_raw(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn is_sentinel(&self) -> bool {
        self.0 == VENDOR_OWNER_ID || self.0 == ADMIN_ID
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
