//! Domain Layer
//!
//! Contains entities, value objects, the identity resolver and repository traits.

pub mod entity;
pub mod identity;
pub mod repository;
pub mod value_object;

// Re-exports
pub use entity::user::{LedgerDefaults, User, UserPatch};
pub use identity::IdentityResolver;
pub use repository::SessionStore;
