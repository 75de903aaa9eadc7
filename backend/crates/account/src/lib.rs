//! Account Module
//!
//! Session, identity and reputation ledger for the directory site.
//!
//! Clean Architecture structure:
//! - `domain/` - User entity, value objects, identity resolver, store trait
//! - `application/` - Session context, use cases, config
//! - `infra/` - Key/value backed session store
//!
//! ## Features
//! - Simulated sign-in by email with role derived from the address
//! - Registration as consumer or vendor
//! - Write-through persisted session, restored once at startup
//! - Credits, reputation, badges and referral counters
//!
//! ## Security Model
//! None. Passwords are never checked and everything runs client-side; this
//! crate must not be used as an authorization boundary.

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;

// Re-exports for convenience
pub use application::{AccountConfig, RegisterInput, SessionContext, SessionManager};
pub use error::{AccountError, AccountResult};
pub use infra::kv::KvSessionStore;

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

pub mod models {
    pub use crate::domain::entity::user::*;
    pub use crate::domain::value_object::{
        badge::Badge, ban_list::BanList, email::Email,
        notification_preferences::NotificationPreferences, referral_code::ReferralCode,
        user_id::UserId, user_role::RegistrationRole, user_role::UserRole,
        user_status::UserStatus,
    };
}
