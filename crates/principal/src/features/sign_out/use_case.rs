//! `signOut` (`spec.md` §4.8): idempotent. A missing row is not an error; a
//! row that is already `used` performs no further state change (`spec.md`
//! §8: "a second call with the same token yields success with no state
//! change") — only the call that actually wins the unused→used transition
//! clears the role cache and publishes `UserSignedOut`.

use std::sync::Arc;

use kernel::EventPublisher;
use tracing::instrument;

use crate::events::UserSignedOut;
use crate::shared::application::{RoleCache, TokenStore};

use super::dto::SignOutRequest;
use super::error::SignOutError;

pub struct SignOutUseCase<T, RC, B> {
    tokens: Arc<T>,
    role_cache: Arc<RC>,
    events: Arc<B>,
}

impl<T, RC, B> SignOutUseCase<T, RC, B>
where
    T: TokenStore,
    RC: RoleCache,
    B: EventPublisher,
{
    pub fn new(tokens: Arc<T>, role_cache: Arc<RC>, events: Arc<B>) -> Self {
        Self { tokens, role_cache, events }
    }

    #[instrument(name = "sign_out", skip(self, request))]
    pub async fn handle(&self, request: SignOutRequest) -> Result<(), SignOutError> {
        let Some(row) = self.tokens.get_by_refresh_token(&request.refresh_token).await? else {
            return Ok(());
        };

        if self.tokens.try_mark_used(row.id).await? {
            self.role_cache.clear(row.user_id).await?;
            let _ = self.events.publish(UserSignedOut { uid: row.user_id }).await;
        }

        Ok(())
    }
}
