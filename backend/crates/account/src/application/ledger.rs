//! Ledger Use Case
//!
//! Credit, reputation, badge, referral and profile mutations on the current
//! user. Each returns the committed snapshot, or `None` when nobody is
//! signed in.

use std::sync::Arc;

use crate::application::session::SessionContext;
use crate::domain::entity::user::{User, UserPatch};
use crate::domain::repository::SessionStore;
use crate::domain::value_object::badge::Badge;
use crate::error::AccountResult;

pub struct LedgerUseCase<S>
where
    S: SessionStore,
{
    session: Arc<SessionContext<S>>,
}

impl<S> LedgerUseCase<S>
where
    S: SessionStore,
{
    pub fn new(session: Arc<SessionContext<S>>) -> Self {
        Self { session }
    }

    pub async fn adjust_credits(&self, delta: i64) -> AccountResult<Option<User>> {
        self.update("adjust_credits", |user| {
            Some(user.with_credits_adjusted(delta))
        })
        .await
    }

    pub async fn apply_partial_update(&self, patch: UserPatch) -> AccountResult<Option<User>> {
        self.update("apply_partial_update", |user| Some(user.merged(&patch)))
            .await
    }

    pub async fn add_reputation(&self, delta: i64) -> AccountResult<Option<User>> {
        self.update("add_reputation", |user| {
            Some(user.with_reputation_added(delta))
        })
        .await
    }

    /// Already-held badges leave the record as it is
    pub async fn award_badge(&self, badge: Badge) -> AccountResult<Option<User>> {
        self.update("award_badge", |user| user.with_badge(badge)).await
    }

    pub async fn record_referral(&self) -> AccountResult<Option<User>> {
        self.update("record_referral", |user| Some(user.with_referral_recorded()))
            .await
    }

    /// `f` returning `None` means nothing changed and nothing is persisted.
    async fn update<F>(&self, operation: &'static str, f: F) -> AccountResult<Option<User>>
    where
        F: FnOnce(&User) -> Option<User>,
    {
        let writer = self.session.writer().await;

        let Some(current) = writer.current().await else {
            tracing::debug!(operation, "No active session, ledger update skipped");
            return Ok(None);
        };

        match f(&current) {
            Some(next) => {
                let user = writer.commit(next).await?;
                tracing::debug!(
                    operation,
                    user_id = %user.id,
                    credits = user.credits,
                    reputation_points = user.reputation_points,
                    "Ledger updated"
                );
                Ok(Some(user))
            }
            None => Ok(Some(current)),
        }
    }
}
