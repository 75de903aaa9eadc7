//! User Entity
//!
//! The signed-in user's profile and ledger. This is also the exact shape of
//! the persisted session record, so field names are fixed by the camelCase
//! serde mapping below.
//!
//! Mutations never edit in place. Each one returns a new snapshot which the
//! session writer then commits to memory and storage together.

use serde::{Deserialize, Serialize};

use crate::domain::value_object::{
    badge::Badge, email::Email, notification_preferences::NotificationPreferences,
    referral_code::ReferralCode, user_id::UserId, user_role::UserRole, user_status::UserStatus,
};

/// User entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: Email,
    /// Avatar URL
    pub image: String,
    pub role: UserRole,
    /// May go negative; spending policy belongs to the caller
    pub credits: i64,
    /// Append-only, insertion ordered, no duplicates
    pub badges: Vec<Badge>,
    pub reputation_points: i64,
    /// Immutable once issued
    pub referral_code: ReferralCode,
    pub referral_count: u32,
    pub notification_preferences: NotificationPreferences,
    pub status: UserStatus,
}

/// Ledger portion of a user, carried into a rebuilt identity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LedgerDefaults {
    pub credits: i64,
    pub badges: Vec<Badge>,
    pub reputation_points: i64,
    pub referral_code: ReferralCode,
    pub referral_count: u32,
    pub notification_preferences: NotificationPreferences,
}

impl LedgerDefaults {
    /// Zeroed ledger with a newly issued referral code
    pub fn fresh() -> Self {
        Self {
            credits: 0,
            badges: Vec::new(),
            reputation_points: 0,
            referral_code: ReferralCode::generate(),
            referral_count: 0,
            notification_preferences: NotificationPreferences::default(),
        }
    }
}

/// Partial profile update. `None` fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserPatch {
    pub name: Option<String>,
    pub image: Option<String>,
    pub notification_preferences: Option<NotificationPreferences>,
}

impl UserPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.image.is_none() && self.notification_preferences.is_none()
    }
}

impl User {
    pub fn can_login(&self) -> bool {
        self.status.can_login()
    }

    pub fn has_badge(&self, badge: &Badge) -> bool {
        self.badges.contains(badge)
    }

    /// Current ledger, used when the same person signs in again
    pub fn ledger(&self) -> LedgerDefaults {
        LedgerDefaults {
            credits: self.credits,
            badges: self.badges.clone(),
            reputation_points: self.reputation_points,
            referral_code: self.referral_code.clone(),
            referral_count: self.referral_count,
            notification_preferences: self.notification_preferences,
        }
    }

    pub fn with_credits_adjusted(&self, delta: i64) -> Self {
        Self {
            credits: self.credits.saturating_add(delta),
            ..self.clone()
        }
    }

    pub fn with_reputation_added(&self, delta: i64) -> Self {
        Self {
            reputation_points: self.reputation_points.saturating_add(delta),
            ..self.clone()
        }
    }

    /// `None` when the badge is already held
    pub fn with_badge(&self, badge: Badge) -> Option<Self> {
        if self.has_badge(&badge) {
            return None;
        }
        let mut next = self.clone();
        next.badges.push(badge);
        Some(next)
    }

    pub fn with_referral_recorded(&self) -> Self {
        Self {
            referral_count: self.referral_count.saturating_add(1),
            ..self.clone()
        }
    }

    /// Structural merge of a partial update
    pub fn merged(&self, patch: &UserPatch) -> Self {
        let mut next = self.clone();
        if let Some(name) = &patch.name {
            next.name = name.clone();
        }
        if let Some(image) = &patch.image {
            next.image = image.clone();
        }
        if let Some(preferences) = patch.notification_preferences {
            next.notification_preferences = preferences;
        }
        next
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;

    pub fn consumer(email: &str) -> User {
        let ledger = LedgerDefaults::fresh();
        User {
            id: UserId::generate(),
            name: "Tester".to_string(),
            email: Email::new(email),
            image: "https://example.com/avatar.png".to_string(),
            role: UserRole::Consumer,
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
