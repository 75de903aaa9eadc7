//! Session Context
//!
//! Owns the in-memory current user and is the only writer of the session
//! store. Readers call [`SessionContext::current_user`]; anything that
//! mutates goes through a [`SessionWriter`], which holds the per-session
//! mutation lock for its whole lifetime so write-throughs never interleave.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{Mutex, MutexGuard, RwLock};

use crate::domain::entity::user::User;
use crate::domain::repository::SessionStore;
use crate::error::AccountResult;

pub struct SessionContext<S> {
    store: Arc<S>,
    current: RwLock<Option<User>>,
    mutations: Mutex<()>,
}

impl<S> SessionContext<S>
where
    S: SessionStore,
{
    /// Load the persisted session once at startup.
    ///
    /// Any failure to read leaves the session signed out.
    pub async fn restore(store: Arc<S>) -> Self {
        let current = match store.load().await {
            Ok(current) => current,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to restore session, starting signed out");
                None
            }
        };

        match &current {
            Some(user) => tracing::info!(
                user_id = %user.id,
                role = %user.role,
                "Session restored"
            ),
            None => tracing::debug!("No persisted session"),
        }

        Self {
            store,
            current: RwLock::new(current),
            mutations: Mutex::new(()),
        }
    }

    pub async fn current_user(&self) -> Option<User> {
        self.current.read().await.clone()
    }

    pub async fn is_signed_in(&self) -> bool {
        self.current.read().await.is_some()
    }

    /// Acquire exclusive mutation rights. Waits for any in-flight mutation.
    pub async fn writer(&self) -> SessionWriter<'_, S> {
        SessionWriter {
            context: self,
            _guard: self.mutations.lock().await,
        }
    }
}

/// Exclusive handle for mutating the session
pub struct SessionWriter<'a, S> {
    context: &'a SessionContext<S>,
    _guard: MutexGuard<'a, ()>,
}

impl<S> SessionWriter<'_, S>
where
    S: SessionStore,
{
    pub async fn current(&self) -> Option<User> {
        self.context.current_user().await
    }

    pub fn store(&self) -> &S {
        &self.context.store
    }

    /// Write-through: persist, then replace the in-memory user.
    ///
    /// On a storage failure memory is left untouched.
    pub async fn commit(&self, user: User) -> AccountResult<User> {
        self.context.store.save(&user).await?;
        *self.context.current.write().await = Some(user.clone());
        Ok(user)
    }

    /// Remove the current user from storage and memory
    pub async fn clear(&self) -> AccountResult<()> {
        self.context.store.clear().await?;
        *self.context.current.write().await = None;
        Ok(())
    }
}

/// Modeled network round trip. Yields to the runtime, never blocks.
pub(crate) async fn simulate_latency(latency: Duration) {
    if !latency.is_zero() {
        tokio::time::sleep(latency).await;
    }
}
