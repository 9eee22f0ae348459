//! Port for the Role Cache (C7, `spec.md` §4.7): key shape `auth:token:{uid}`,
//! value an unordered set of role-code strings, TTL equal to the access-token
//! lifetime. Enforcement consults this to expand a principal's `uid` into the
//! subjects Casbin's RBAC layer reasons about; an absent entry means zero
//! roles, never an error.

use std::collections::HashSet;
use std::time::Duration;

use async_trait::async_trait;
use kernel::ApiError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RoleCache: Send + Sync {
    /// Writes (or overwrites) the role set for `uid` with the given TTL. An
    /// empty `HashSet` is a valid, distinguishable-from-absent entry
    /// (`spec.md` §4.7: "must not write NULL or an empty sentinel that
    /// cannot be distinguished from 'no entry'").
    async fn put(&self, uid: i64, roles: HashSet<String>, ttl: Duration) -> Result<(), ApiError>;

    /// `None` means no entry — callers must treat that as zero roles, not an
    /// error.
    async fn get(&self, uid: i64) -> Result<Option<HashSet<String>>, ApiError>;

    async fn clear(&self, uid: i64) -> Result<(), ApiError>;
}
