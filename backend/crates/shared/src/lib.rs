//! Shared Kernel - Domain-crossing minimal core
//!
//! This crate contains the "smallest core" of vocabulary shared by the
//! account and moderation contexts:
//! - Common error types and result aliases
//! - Typed identifier wrappers
//!
//! Only things with the same meaning in every context belong here.

pub mod error {
    pub mod app_error;
    pub mod kind;
}
pub mod id;
