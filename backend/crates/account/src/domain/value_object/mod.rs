//! Value Object Module

pub mod badge;
pub mod ban_list;
pub mod email;
pub mod notification_preferences;
pub mod referral_code;
pub mod user_id;
pub mod user_role;
pub mod user_status;
