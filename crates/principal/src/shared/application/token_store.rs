//! Port for token-pair rows (`spec.md` §3 "Token pair", §6 "Persisted state
//! layout"). `try_mark_used` is the compare-and-set primitive
//! `refreshToken`/`signOut` build their single-use guarantee on (`spec.md`
//! §8 invariant 6: "a refresh token can transition unused → used at most
//! once").

use async_trait::async_trait;
use kernel::ApiError;

use crate::domain::{RequestContext, TokenRecord};

#[derive(Debug, Clone)]
pub struct NewTokenRecord {
    pub access_token: String,
    pub refresh_token: String,
    pub user_id: i64,
    pub username: String,
    pub domain: String,
    pub context: RequestContext,
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TokenStore: Send + Sync {
    /// Inserts a new row with `status = unused`.
    async fn insert(&self, record: NewTokenRecord) -> Result<TokenRecord, ApiError>;

    async fn get_by_refresh_token(&self, refresh_token: &str) -> Result<Option<TokenRecord>, ApiError>;

    /// Atomically transitions the row with this id from `unused` to `used`.
    /// Returns `true` iff this call performed the transition — exactly one
    /// concurrent caller racing on the same id ever observes `true`. Returns
    /// `false` if the row is missing or already `used`.
    async fn try_mark_used(&self, id: i64) -> Result<bool, ApiError>;
}
