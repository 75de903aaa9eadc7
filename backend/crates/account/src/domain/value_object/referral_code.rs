//! Referral Code Value Object

use platform::crypto::{UPPER_ALPHANUMERIC, random_code};
use serde::{Deserialize, Serialize};
use std::fmt;

pub const REFERRAL_CODE_LENGTH: usize = 8;

/// Generated once per user and never changed afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReferralCode(String);

impl ReferralCode {
    pub fn generate() -> Self {
        Self(random_code(REFERRAL_CODE_LENGTH, UPPER_ALPHANUMERIC))
    }

    pub fn from_raw(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ReferralCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
