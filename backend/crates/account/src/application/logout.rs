//! Logout Use Case

use std::sync::Arc;

use crate::application::session::SessionContext;
use crate::domain::repository::SessionStore;
use crate::error::AccountResult;

/// Logout use case
pub struct LogoutUseCase<S>
where
    S: SessionStore,
{
    session: Arc<SessionContext<S>>,
}

impl<S> LogoutUseCase<S>
where
    S: SessionStore,
{
    pub fn new(session: Arc<SessionContext<S>>) -> Self {
        Self { session }
    }

    /// Clear the session. Safe to call when already signed out.
    pub async fn execute(&self) -> AccountResult<()> {
        let writer = self.session.writer().await;
        let previous = writer.current().await;

        writer.clear().await?;

        match previous {
            Some(user) => tracing::info!(user_id = %user.id, "User logged out"),
            None => tracing::debug!("Logout without active session"),
        }
        Ok(())
    }
}
