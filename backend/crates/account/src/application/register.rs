//! Register Use Case
//!
//! Creates a new account and signs it in.

use std::sync::Arc;

use crate::application::config::AccountConfig;
use crate::application::session::{SessionContext, simulate_latency};
use crate::domain::entity::user::User;
use crate::domain::identity::IdentityResolver;
use crate::domain::repository::SessionStore;
use crate::domain::value_object::{email::Email, user_role::RegistrationRole};
use crate::error::{AccountError, AccountResult};

/// Register input
pub struct RegisterInput {
    pub name: String,
    pub email: String,
    /// Accepted, never validated or stored
    pub password: String,
    pub role: RegistrationRole,
}

/// Register use case
pub struct RegisterUseCase<S>
where
    S: SessionStore,
{
    session: Arc<SessionContext<S>>,
    resolver: Arc<IdentityResolver>,
    config: Arc<AccountConfig>,
}

impl<S> RegisterUseCase<S>
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

    pub async fn execute(&self, input: RegisterInput) -> AccountResult<User> {
        let name = input.name.trim();
        if name.is_empty() {
            return Err(AccountError::InvalidInput("Name is required".to_string()));
        }
        let email = Email::new(&input.email);
        if email.is_blank() {
            return Err(AccountError::InvalidInput("Email is required".to_string()));
        }

        let writer = self.session.writer().await;

        simulate_latency(self.config.network_latency).await;

        let user = self.resolver.register(name, &email, input.role);
        let user = writer.commit(user).await?;

        tracing::info!(
            user_id = %user.id,
            role = %user.role,
            "User registered"
        );

        Ok(user)
    }
}
