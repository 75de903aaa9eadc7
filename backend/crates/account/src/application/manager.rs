//! Session Manager
//!
//! The surface page components depend on. Wires the session context, the
//! identity resolver and config into the individual use cases.

use std::sync::Arc;

use platform::storage::KeyValueStore;

use crate::application::config::AccountConfig;
use crate::application::ledger::LedgerUseCase;
use crate::application::login::{LoginInput, LoginUseCase};
use crate::application::logout::LogoutUseCase;
use crate::application::register::{RegisterInput, RegisterUseCase};
use crate::application::session::SessionContext;
use crate::domain::entity::user::{User, UserPatch};
use crate::domain::identity::IdentityResolver;
use crate::domain::repository::SessionStore;
use crate::domain::value_object::badge::Badge;
use crate::error::AccountResult;
use crate::infra::kv::KvSessionStore;

pub struct SessionManager<S>
where
    S: SessionStore,
{
    session: Arc<SessionContext<S>>,
    resolver: Arc<IdentityResolver>,
    config: Arc<AccountConfig>,
}

impl<S> SessionManager<S>
where
    S: SessionStore,
{
    /// Restore the persisted session and build the manager
    pub async fn init(store: S, config: AccountConfig) -> Self {
        let session = Arc::new(SessionContext::restore(Arc::new(store)).await);
        let resolver = Arc::new(IdentityResolver::new(config.avatar_base_url.clone()));
        Self {
            session,
            resolver,
            config: Arc::new(config),
        }
    }

    /// Shared session, for other contexts that gate on the signed-in user
    pub fn session(&self) -> Arc<SessionContext<S>> {
        Arc::clone(&self.session)
    }

    pub fn config(&self) -> &AccountConfig {
        &self.config
    }

    pub async fn current_user(&self) -> Option<User> {
        self.session.current_user().await
    }

    pub async fn login(&self, email: &str, password: &str) -> AccountResult<User> {
        LoginUseCase::new(
            self.session(),
            Arc::clone(&self.resolver),
            Arc::clone(&self.config),
        )
        .execute(LoginInput {
            email: email.to_string(),
            password: password.to_string(),
        })
        .await
    }

    pub async fn register(&self, input: RegisterInput) -> AccountResult<User> {
        RegisterUseCase::new(
            self.session(),
            Arc::clone(&self.resolver),
            Arc::clone(&self.config),
        )
        .execute(input)
        .await
    }

    pub async fn logout(&self) -> AccountResult<()> {
        LogoutUseCase::new(self.session()).execute().await
    }

    pub async fn adjust_credits(&self, delta: i64) -> AccountResult<Option<User>> {
        self.ledger().adjust_credits(delta).await
    }

    pub async fn apply_partial_update(&self, patch: UserPatch) -> AccountResult<Option<User>> {
        self.ledger().apply_partial_update(patch).await
    }

    pub async fn add_reputation(&self, delta: i64) -> AccountResult<Option<User>> {
        self.ledger().add_reputation(delta).await
    }

    pub async fn award_badge(&self, badge: impl Into<Badge>) -> AccountResult<Option<User>> {
        self.ledger().award_badge(badge.into()).await
    }

    pub async fn record_referral(&self) -> AccountResult<Option<User>> {
        self.ledger().record_referral().await
    }

    fn ledger(&self) -> LedgerUseCase<S> {
        LedgerUseCase::new(self.session())
    }
}

impl<K> SessionManager<KvSessionStore<K>>
where
    K: KeyValueStore + Sync,
{
    /// Build over a key/value backend using the configured keys
    pub async fn with_kv(kv: K, config: AccountConfig) -> Self {
        let store = KvSessionStore::new(kv, &config);
        Self::init(store, config).await
    }
}
