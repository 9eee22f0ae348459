//! `execPasswordLogin` (`spec.md` §4.8): authenticate, issue an opaque
//! access+refresh pair, persist the token row, populate the role cache,
//! publish `UserLoggedIn` + `TokenGenerated`.

use std::sync::Arc;
use std::time::Duration;

use kernel::EventPublisher;
use tracing::{info, instrument};

use crate::domain::TokenPair;
use crate::events::{TokenGenerated, UserLoggedIn};
use crate::shared::application::{NewTokenRecord, RoleCache, RoleLookup, TokenStore, UserRepository};
use crate::shared::infrastructure::TokenCodec;

use super::dto::PasswordLoginRequest;
use super::error::PasswordLoginError;

pub struct PasswordLoginUseCase<U, T, RC, RL, B> {
    users: Arc<U>,
    tokens: Arc<T>,
    role_cache: Arc<RC>,
    role_lookup: Arc<RL>,
    events: Arc<B>,
    access_codec: Arc<TokenCodec>,
    refresh_codec: Arc<TokenCodec>,
    access_ttl: Duration,
    refresh_ttl: Duration,
}

impl<U, T, RC, RL, B> PasswordLoginUseCase<U, T, RC, RL, B>
where
    U: UserRepository,
    T: TokenStore,
    RC: RoleCache,
    RL: RoleLookup,
    B: EventPublisher,
{
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        users: Arc<U>,
        tokens: Arc<T>,
        role_cache: Arc<RC>,
        role_lookup: Arc<RL>,
        events: Arc<B>,
        access_codec: Arc<TokenCodec>,
        refresh_codec: Arc<TokenCodec>,
        access_ttl: Duration,
        refresh_ttl: Duration,
    ) -> Self {
        Self { users, tokens, role_cache, role_lookup, events, access_codec, refresh_codec, access_ttl, refresh_ttl }
    }

    #[instrument(name = "exec_password_login", skip(self, request), fields(identifier = %request.identifier))]
    pub async fn handle(&self, request: PasswordLoginRequest) -> Result<TokenPair, PasswordLoginError> {
        let user = self
            .users
            .find_by_identifier(&request.identifier)
            .await?
            .ok_or(PasswordLoginError::UserNotFound)?;

        if !user.password_hash.verify(&request.password) {
            return Err(PasswordLoginError::WrongPassword);
        }
        if !user.enabled {
            return Err(PasswordLoginError::AccountDisabled);
        }

        let access_token = self
            .access_codec
            .issue(user.uid, &user.username, &user.domain, self.access_ttl.as_secs() as i64)?;
        let refresh_token = self
            .refresh_codec
            .issue(user.uid, &user.username, &user.domain, self.refresh_ttl.as_secs() as i64)?;

        let row = self
            .tokens
            .insert(NewTokenRecord {
                access_token: access_token.clone(),
                refresh_token: refresh_token.clone(),
                user_id: user.uid,
                username: user.username.clone(),
                domain: user.domain.clone(),
                context: request.context,
            })
            .await?;

        let roles = self.role_lookup.roles_for(user.uid, &user.domain).await?;
        self.role_cache.put(user.uid, roles, self.access_ttl).await?;

        let _ = self
            .events
            .publish(UserLoggedIn { uid: user.uid, username: user.username.clone(), domain: user.domain.clone() })
            .await;
        let _ = self.events.publish(TokenGenerated { token_id: row.id, uid: user.uid }).await;

        info!(uid = user.uid, token_id = row.id, "password login succeeded");
        Ok(TokenPair { access_token, refresh_token })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{PasswordHash, RequestContext, User};
    use crate::shared::application::{MockRoleCache, MockRoleLookup, MockTokenStore, MockUserRepository};
    use kernel::InMemoryEventBus;
    use std::collections::HashSet;

    fn alice() -> User {
        User {
            uid: 1,
            username: "alice".to_string(),
            email: "alice@example.com".to_string(),
            phone_number: "555-0100".to_string(),
            domain: "default".to_string(),
            password_hash: PasswordHash::of_plaintext("s3cret"),
            enabled: true,
            email_verified: false,
        }
    }

    fn use_case(
        users: MockUserRepository,
        mut tokens: MockTokenStore,
        mut role_cache: MockRoleCache,
        mut role_lookup: MockRoleLookup,
    ) -> PasswordLoginUseCase<MockUserRepository, MockTokenStore, MockRoleCache, MockRoleLookup, InMemoryEventBus> {
        tokens.expect_insert().returning(|record| {
            Ok(crate::domain::TokenRecord {
                id: 1,
                access_token: record.access_token,
                refresh_token: record.refresh_token,
                status: crate::domain::TokenStatus::Unused,
                user_id: record.user_id,
                username: record.username,
                domain: record.domain,
                context: record.context,
                created_at: chrono::Utc::now(),
            })
        });
        role_cache.expect_put().returning(|_, _, _| Ok(()));
        role_lookup.expect_roles_for().returning(|_, _| Ok(HashSet::new()));

        PasswordLoginUseCase::new(
            Arc::new(users),
            Arc::new(tokens),
            Arc::new(role_cache),
            Arc::new(role_lookup),
            Arc::new(InMemoryEventBus::new()),
            Arc::new(TokenCodec::new(b"access-secret")),
            Arc::new(TokenCodec::new(b"refresh-secret")),
            Duration::from_secs(3600),
            Duration::from_secs(86_400),
        )
    }

    #[tokio::test]
    async fn issues_a_pair_on_correct_credentials() {
        let mut users = MockUserRepository::new();
        users.expect_find_by_identifier().returning(|_| Ok(Some(alice())));

        let use_case = use_case(users, MockTokenStore::new(), MockRoleCache::new(), MockRoleLookup::new());
        let pair = use_case
            .handle(PasswordLoginRequest {
                identifier: "alice".to_string(),
                password: "s3cret".to_string(),
                context: RequestContext::default(),
            })
            .await
            .unwrap();

        assert!(!pair.access_token.is_empty());
        assert!(!pair.refresh_token.is_empty());
        assert_ne!(pair.access_token, pair.refresh_token);
    }

    #[tokio::test]
    async fn fails_not_found_when_no_user_matches() {
        let mut users = MockUserRepository::new();
        users.expect_find_by_identifier().returning(|_| Ok(None));

        let use_case = use_case(users, MockTokenStore::new(), MockRoleCache::new(), MockRoleLookup::new());
        let err = use_case
            .handle(PasswordLoginRequest {
                identifier: "ghost".to_string(),
                password: "irrelevant".to_string(),
                context: RequestContext::default(),
            })
            .await
            .unwrap_err();
        assert!(matches!(err, PasswordLoginError::UserNotFound));
    }

    #[tokio::test]
    async fn fails_on_wrong_password_without_touching_the_token_store() {
        let mut users = MockUserRepository::new();
        users.expect_find_by_identifier().returning(|_| Ok(Some(alice())));

        let use_case =
            PasswordLoginUseCase::new(
                Arc::new(users),
                Arc::new(MockTokenStore::new()),
                Arc::new(MockRoleCache::new()),
                Arc::new(MockRoleLookup::new()),
                Arc::new(InMemoryEventBus::new()),
                Arc::new(TokenCodec::new(b"access-secret")),
                Arc::new(TokenCodec::new(b"refresh-secret")),
                Duration::from_secs(3600),
                Duration::from_secs(86_400),
            );

        let err = use_case
            .handle(PasswordLoginRequest {
                identifier: "alice".to_string(),
                password: "wrong".to_string(),
                context: RequestContext::default(),
            })
            .await
            .unwrap_err();
        assert!(matches!(err, PasswordLoginError::WrongPassword));
    }

    #[tokio::test]
    async fn fails_when_the_account_is_disabled() {
        let mut users = MockUserRepository::new();
        let mut disabled = alice();
        disabled.enabled = false;
        users.expect_find_by_identifier().returning(move |_| Ok(Some(disabled.clone())));

        let use_case =
            PasswordLoginUseCase::new(
                Arc::new(users),
                Arc::new(MockTokenStore::new()),
                Arc::new(MockRoleCache::new()),
                Arc::new(MockRoleLookup::new()),
                Arc::new(InMemoryEventBus::new()),
                Arc::new(TokenCodec::new(b"access-secret")),
                Arc::new(TokenCodec::new(b"refresh-secret")),
                Duration::from_secs(3600),
                Duration::from_secs(86_400),
            );

        let err = use_case
            .handle(PasswordLoginRequest {
                identifier: "alice".to_string(),
                password: "s3cret".to_string(),
                context: RequestContext::default(),
            })
            .await
            .unwrap_err();
        assert!(matches!(err, PasswordLoginError::AccountDisabled));
    }
}
