//! Identity Resolver
//!
//! Derives a role and profile from an email address. Sign-in is simulated,
//! so the heuristics below stand in for a real identity provider:
//!
//! 1. An exact match on a reserved demo identity substitutes that profile.
//! 2. An address containing `admin` resolves to the admin sentinel.
//! 3. An address containing `vendor` resolves to the vendor-owner sentinel,
//!    which owns the seeded demo business.
//! 4. Anything else is a consumer with a fresh id.

use crate::domain::entity::user::{LedgerDefaults, User};
use crate::domain::value_object::{
    email::Email,
    notification_preferences::NotificationPreferences,
    user_id::{ADMIN_ID, UserId, VENDOR_OWNER_ID},
    user_role::{RegistrationRole, UserRole},
    user_status::UserStatus,
};

/// Demo fixture profile substituted verbatim on an exact email match
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReservedProfile {
    pub email: &'static str,
    pub id: &'static str,
    pub name: &'static str,
    pub image: &'static str,
    pub role: UserRole,
    pub notification_preferences: NotificationPreferences,
    pub status: UserStatus,
}

pub const RESERVED_PROFILES: [ReservedProfile; 2] = [
    ReservedProfile {
        email: "owner@directory.demo",
        id: VENDOR_OWNER_ID,
        name: "Demo Vendor",
        image: "https://api.dicebear.com/7.x/initials/svg?seed=Demo%20Vendor",
        role: UserRole::Vendor,
        notification_preferences: NotificationPreferences::ALL,
        status: UserStatus::Active,
    },
    ReservedProfile {
        email: "admin@directory.demo",
        id: ADMIN_ID,
        name: "Site Admin",
        image: "https://api.dicebear.com/7.x/initials/svg?seed=Site%20Admin",
        role: UserRole::Admin,
        notification_preferences: NotificationPreferences {
            email: true,
            in_app: false,
        },
        status: UserStatus::Active,
    },
];

/// Reserved profile for this exact address, if any
pub fn reserved_profile(email: &Email) -> Option<&'static ReservedProfile> {
    RESERVED_PROFILES
        .iter()
        .find(|profile| email.matches(profile.email))
}

/// Role heuristic. Admin is checked before vendor.
pub fn resolve_role(email: &Email) -> UserRole {
    let lowered = email.as_str().to_lowercase();
    if lowered.contains("admin") {
        UserRole::Admin
    } else if lowered.contains("vendor") {
        UserRole::Vendor
    } else {
        UserRole::Consumer
    }
}

/// Capitalize the first character of a handle.
///
/// Falls back to the raw handle when upper-casing changes nothing or the
/// handle is empty.
pub fn display_name(local_part: &str) -> String {
    let mut chars = local_part.chars();
    match chars.next() {
        Some(first) => {
            let upper: String = first.to_uppercase().collect();
            if upper.is_empty() {
                local_part.to_string()
            } else {
                upper + chars.as_str()
            }
        }
        None => local_part.to_string(),
    }
}

fn id_for_role(role: UserRole) -> UserId {
    match role {
        UserRole::Admin => UserId::admin(),
        UserRole::Vendor => UserId::vendor_owner(),
        UserRole::Consumer => UserId::generate(),
    }
}

/// Builds user records from an email address
#[derive(Debug, Clone)]
pub struct IdentityResolver {
    avatar_base_url: String,
}

impl IdentityResolver {
    pub fn new(avatar_base_url: impl Into<String>) -> Self {
        Self {
            avatar_base_url: avatar_base_url.into(),
        }
    }

    /// Avatar URL seeded with the handle before `@`, percent-encoded
    pub fn avatar_for(&self, email: &Email) -> String {
        format!(
            "{}{}",
            self.avatar_base_url,
            urlencoding::encode(email.local_part())
        )
    }

    /// Build the user a sign-in with `email` produces.
    ///
    /// The ledger comes from `defaults`; identity fields come from the
    /// reserved profile or the heuristics.
    pub fn build_user(&self, email: &Email, defaults: LedgerDefaults) -> User {
        let LedgerDefaults {
            credits,
            badges,
            reputation_points,
            referral_code,
            referral_count,
            notification_preferences,
        } = defaults;

        if let Some(profile) = reserved_profile(email) {
            return User {
                id: UserId::from_raw(profile.id),
                name: profile.name.to_string(),
                email: email.clone(),
                image: profile.image.to_string(),
                role: profile.role,
                credits,
                badges,
                reputation_points,
                referral_code,
                referral_count,
                notification_preferences: profile.notification_preferences,
                status: profile.status,
            };
        }

        let role = resolve_role(email);
        User {
            id: id_for_role(role),
            name: display_name(email.local_part()),
            email: email.clone(),
            image: self.avatar_for(email),
            role,
            credits,
            badges,
            reputation_points,
            referral_code,
            referral_count,
            notification_preferences,
            status: UserStatus::Active,
        }
    }

    /// Build a freshly registered user. No heuristics: the caller picks the
    /// role and the id is always new.
    pub fn register(&self, name: &str, email: &Email, role: RegistrationRole) -> User {
        let ledger = LedgerDefaults::fresh();
        User {
            id: UserId::generate(),
            name: name.to_string(),
            email: email.clone(),
            image: self.avatar_for(email),
            role: role.into(),
            credits: ledger.credits,
            badges: ledger.badges,
            reputation_points: ledger.reputation_points,
            referral_code: ledger.referral_code,
            referral_count: ledger.referral_count,
            notification_preferences: ledger.notification_preferences,
            status: UserStatus::Active,
        }
    }
}
