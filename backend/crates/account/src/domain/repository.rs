//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use crate::domain::entity::user::User;
use crate::domain::value_object::email::Email;
use crate::error::AccountResult;

/// Persisted session store
///
/// Holds at most one user record plus the externally maintained ban list.
/// Every `save` is a total overwrite; there is no partial update.
#[trait_variant::make(SessionStore: Send)]
pub trait LocalSessionStore {
    /// Load the persisted current user.
    ///
    /// Absent or unparsable records yield `Ok(None)`.
    async fn load(&self) -> AccountResult<Option<User>>;

    /// Persist the current user, replacing any previous record
    async fn save(&self, user: &User) -> AccountResult<()>;

    /// Remove the persisted current user. Succeeds when already absent.
    async fn clear(&self) -> AccountResult<()>;

    /// Check the ban list
    async fn is_banned(&self, email: &Email) -> AccountResult<bool>;
}
