//! `refreshToken` (`spec.md` §4.8): single-use exchange of a refresh token
//! for a new access+refresh pair. `TokenStore::try_mark_used` is the
//! compare-and-set primitive that makes "exactly one concurrent refresh of
//! the same token succeeds" (`spec.md` §5, §8 invariant 6) hold.

use std::sync::Arc;
use std::time::Duration;

use kernel::EventPublisher;
use tracing::{info, instrument};

use crate::domain::TokenPair;
use crate::events::{RefreshTokenUsed, TokenGenerated};
use crate::shared::application::{NewTokenRecord, TokenStore};
use crate::shared::infrastructure::TokenCodec;

use super::dto::TokenRefreshRequest;
use super::error::TokenRefreshError;

pub struct TokenRefreshUseCase<T, B> {
    tokens: Arc<T>,
    events: Arc<B>,
    access_codec: Arc<TokenCodec>,
    refresh_codec: Arc<TokenCodec>,
    access_ttl: Duration,
    refresh_ttl: Duration,
}

impl<T, B> TokenRefreshUseCase<T, B>
where
    T: TokenStore,
    B: EventPublisher,
{
    pub fn new(
        tokens: Arc<T>,
        events: Arc<B>,
        access_codec: Arc<TokenCodec>,
        refresh_codec: Arc<TokenCodec>,
        access_ttl: Duration,
        refresh_ttl: Duration,
    ) -> Self {
        Self { tokens, events, access_codec, refresh_codec, access_ttl, refresh_ttl }
    }

    #[instrument(name = "refresh_token", skip(self, request))]
    pub async fn handle(&self, request: TokenRefreshRequest) -> Result<TokenPair, TokenRefreshError> {
        let row = self
            .tokens
            .get_by_refresh_token(&request.refresh_token)
            .await?
            .ok_or(TokenRefreshError::NotFound)?;

        self.refresh_codec.verify(&request.refresh_token).map_err(|_| TokenRefreshError::InvalidSignature)?;

        if !self.tokens.try_mark_used(row.id).await? {
            return Err(TokenRefreshError::AlreadyUsed);
        }

        let access_token =
            self.access_codec.issue(row.user_id, &row.username, &row.domain, self.access_ttl.as_secs() as i64)?;
        let refresh_token =
            self.refresh_codec.issue(row.user_id, &row.username, &row.domain, self.refresh_ttl.as_secs() as i64)?;

        let new_row = self
            .tokens
            .insert(NewTokenRecord {
                access_token: access_token.clone(),
                refresh_token: refresh_token.clone(),
                user_id: row.user_id,
                username: row.username.clone(),
                domain: row.domain.clone(),
                context: request.context,
            })
            .await?;

        let _ = self.events.publish(RefreshTokenUsed { token_id: row.id, uid: row.user_id }).await;
        let _ = self.events.publish(TokenGenerated { token_id: new_row.id, uid: row.user_id }).await;

        info!(uid = row.user_id, old_token_id = row.id, new_token_id = new_row.id, "refresh token exchanged");
        Ok(TokenPair { access_token, refresh_token })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{RequestContext, TokenRecord, TokenStatus};
    use crate::shared::application::MockTokenStore;
    use kernel::InMemoryEventBus;
    use std::sync::atomic::{AtomicBool, Ordering};

    fn existing_row() -> TokenRecord {
        TokenRecord {
            id: 1,
            access_token: "a1".to_string(),
            refresh_token: "r1".to_string(),
            status: TokenStatus::Unused,
            user_id: 7,
            username: "alice".to_string(),
            domain: "default".to_string(),
            context: RequestContext::default(),
            created_at: chrono::Utc::now(),
        }
    }

    fn use_case(mut tokens: MockTokenStore) -> TokenRefreshUseCase<MockTokenStore, InMemoryEventBus> {
        tokens.expect_insert().returning(|record| {
            Ok(TokenRecord {
                id: 2,
                access_token: record.access_token,
                refresh_token: record.refresh_token,
                status: TokenStatus::Unused,
                user_id: record.user_id,
                username: record.username,
                domain: record.domain,
                context: record.context,
                created_at: chrono::Utc::now(),
            })
        });

        TokenRefreshUseCase::new(
            Arc::new(tokens),
            Arc::new(InMemoryEventBus::new()),
            Arc::new(TokenCodec::new(b"access-secret")),
            Arc::new(TokenCodec::new(b"refresh-secret")),
            Duration::from_secs(3600),
            Duration::from_secs(86_400),
        )
    }

    #[tokio::test]
    async fn exchanges_an_unused_token_for_a_fresh_pair() {
        let refresh_codec = TokenCodec::new(b"refresh-secret");
        let refresh_token = refresh_codec.issue(7, "alice", "default", 86_400).unwrap();

        let mut tokens = MockTokenStore::new();
        let mut row = existing_row();
        row.refresh_token = refresh_token.clone();
        tokens.expect_get_by_refresh_token().returning(move |_| Ok(Some(row.clone())));
        tokens.expect_try_mark_used().returning(|_| Ok(true));

        let use_case = use_case(tokens);
        let pair = use_case
            .handle(TokenRefreshRequest { refresh_token, context: RequestContext::default() })
            .await
            .unwrap();
        assert!(!pair.access_token.is_empty());
    }

    #[tokio::test]
    async fn a_second_refresh_of_an_already_used_token_is_a_conflict() {
        let refresh_codec = TokenCodec::new(b"refresh-secret");
        let refresh_token = refresh_codec.issue(7, "alice", "default", 86_400).unwrap();

        let mut tokens = MockTokenStore::new();
        let mut row = existing_row();
        row.refresh_token = refresh_token.clone();
        tokens.expect_get_by_refresh_token().returning(move |_| Ok(Some(row.clone())));
        tokens.expect_try_mark_used().returning(|_| Ok(false));

        let use_case = use_case(tokens);
        let err = use_case
            .handle(TokenRefreshRequest { refresh_token, context: RequestContext::default() })
            .await
            .unwrap_err();
        assert!(matches!(err, TokenRefreshError::AlreadyUsed));
    }

    #[tokio::test]
    async fn an_unknown_refresh_token_is_not_found() {
        let mut tokens = MockTokenStore::new();
        tokens.expect_get_by_refresh_token().returning(|_| Ok(None));

        let use_case = use_case(tokens);
        let err = use_case
            .handle(TokenRefreshRequest { refresh_token: "ghost".to_string(), context: RequestContext::default() })
            .await
            .unwrap_err();
        assert!(matches!(err, TokenRefreshError::NotFound));
    }

    #[tokio::test]
    async fn exactly_one_of_n_concurrent_refreshes_of_the_same_token_succeeds() {
        use std::sync::Arc as StdArc;

        let refresh_codec = TokenCodec::new(b"refresh-secret");
        let refresh_token = refresh_codec.issue(7, "alice", "default", 86_400).unwrap();

        let mut tokens = MockTokenStore::new();
        let mut row = existing_row();
        row.refresh_token = refresh_token.clone();
        tokens.expect_get_by_refresh_token().returning(move |_| Ok(Some(row.clone())));

        let used = StdArc::new(AtomicBool::new(false));
        let used_for_closure = StdArc::clone(&used);
        tokens
            .expect_try_mark_used()
            .returning(move |_| Ok(!used_for_closure.swap(true, Ordering::SeqCst)));
        tokens.expect_insert().returning(|record| {
            Ok(TokenRecord {
                id: 2,
                access_token: record.access_token,
                refresh_token: record.refresh_token,
                status: TokenStatus::Unused,
                user_id: record.user_id,
                username: record.username,
                domain: record.domain,
                context: record.context,
                created_at: chrono::Utc::now(),
            })
        });

        let use_case = StdArc::new(TokenRefreshUseCase::new(
            StdArc::new(tokens),
            StdArc::new(InMemoryEventBus::new()),
            StdArc::new(TokenCodec::new(b"access-secret")),
            StdArc::new(TokenCodec::new(b"refresh-secret")),
            Duration::from_secs(3600),
            Duration::from_secs(86_400),
        ));

        let mut handles = Vec::new();
        for _ in 0..8 {
            let use_case = StdArc::clone(&use_case);
            let refresh_token = refresh_token.clone();
            handles.push(tokio::spawn(async move {
                use_case.handle(TokenRefreshRequest { refresh_token, context: RequestContext::default() }).await
            }));
        }

        let mut successes = 0;
        for handle in handles {
            if handle.await.unwrap().is_ok() {
                successes += 1;
            }
        }
        assert_eq!(successes, 1);
    }
}
