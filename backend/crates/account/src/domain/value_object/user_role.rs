use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    #[default]
    Consumer,
    Vendor,
    Admin,
}

impl UserRole {
    #[inline]
    pub const fn code(&self) -> &'static str {
        use UserRole::*;
        match self {
            Consumer => "consumer",
            Vendor => "vendor",
            Admin => "admin",
        }
    }

    /// Vendors and admins may manage business listings
    #[inline]
    pub const fn is_vendor_or_higher(&self) -> bool {
        matches!(self, UserRole::Vendor | UserRole::Admin)
    }

    #[inline]
    pub const fn is_admin(&self) -> bool {
        matches!(self, UserRole::Admin)
    }

    #[inline]
    pub fn from_code(code: &str) -> Option<Self> {
        use UserRole::*;
        match code {
            "consumer" => Some(Consumer),
            "vendor" => Some(Vendor),
            "admin" => Some(Admin),
            _ => None,
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Roles a user may pick for themselves at registration.
///
/// Admin is deliberately absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RegistrationRole {
    #[default]
    Consumer,
    Vendor,
}

impl From<RegistrationRole> for UserRole {
    fn from(role: RegistrationRole) -> Self {
        match role {
            RegistrationRole::Consumer => UserRole::Consumer,
            RegistrationRole::Vendor => UserRole::Vendor,
        }
    }
}
