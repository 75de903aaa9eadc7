//! Login Use Case
//!
//! Signs a user in by email. Passwords are accepted but never checked.

use std::sync::Arc;

use crate::application::config::AccountConfig;
use crate::application::session::{SessionContext, simulate_latency};
use crate::domain::entity::user::{LedgerDefaults, User};
use crate::domain::identity::IdentityResolver;
use crate::domain::repository::SessionStore;
use crate::domain::value_object::email::Email;
use crate::error::{AccountError, AccountResult};

/// Login input
pub struct LoginInput {
    pub email: String,
    /// Accepted for interface parity with a real sign-in form
    pub password: String,
}

/// Login use case
pub struct LoginUseCase<S>
where
    S: SessionStore,
{
    session: Arc<SessionContext<S>>,
    resolver: Arc<IdentityResolver>,
    config: Arc<AccountConfig>,
}

impl<S> LoginUseCase<S>
where
    S: SessionStore,
{
    pub fn new(
        session: Arc<SessionContext<S>>,
        resolver: Arc<IdentityResolver>,
        config: Arc<AccountConfig>,
    ) -> Self {
        Self {
            session,
            resolver,
            config,
        }
    }

    pub async fn execute(&self, input: LoginInput) -> AccountResult<User> {
        let email = Email::new(&input.email);
        let writer = self.session.writer().await;

        simulate_latency(self.config.network_latency).await;

        // Ban check comes before any user record is built
        if writer.store().is_banned(&email).await? {
            tracing::warn!(email = %email, "Login rejected: email is banned");
            return Err(AccountError::AccountSuspended);
        }

        // Signing in again as the same person keeps their ledger
        let defaults = match writer.current().await {
            Some(existing) if existing.email == email => {
                if !existing.can_login() {
                    tracing::warn!(user_id = %existing.id, "Login rejected: account suspended");
                    return Err(AccountError::AccountSuspended);
                }
                existing.ledger()
            }
            _ => LedgerDefaults::fresh(),
        };

        let user = self.resolver.build_user(&email, defaults);
        if !user.can_login() {
            tracing::warn!(user_id = %user.id, "Login rejected: account suspended");
            return Err(AccountError::AccountSuspended);
        }

        let user = writer.commit(user).await?;

        tracing::info!(
            user_id = %user.id,
            role = %user.role,
            "User logged in"
        );

        Ok(user)
    }
}
