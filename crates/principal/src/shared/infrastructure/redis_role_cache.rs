//! Redis-backed `RoleCache`. Grounded on the corpus's `Cache<K, V>` Redis
//! wrapper: a `redis::aio::ConnectionManager` handle, values bincode-encoded,
//! keys built from a configurable prefix, writes going through `SETEX` so
//! expiry is enforced by Redis itself rather than a local sweep.
//!
//! Key shape is fixed by `spec.md` §4.7: `{prefix}{uid}`, with `prefix`
//! defaulting to `auth:token:` (`spec.md` §6).

use std::collections::HashSet;
use std::time::Duration;

use async_trait::async_trait;
use kernel::ApiError;
use redis::AsyncCommands;

use crate::shared::application::RoleCache;

type RedisConnection = redis::aio::ConnectionManager;

pub struct RedisRoleCache {
    connection: RedisConnection,
    key_prefix: String,
}

impl RedisRoleCache {
    pub fn new(connection: RedisConnection, key_prefix: impl Into<String>) -> Self {
        Self { connection, key_prefix: key_prefix.into() }
    }

    fn key(&self, uid: i64) -> String {
        format!("{}{}", self.key_prefix, uid)
    }

    fn to_api_error(err: impl std::fmt::Display) -> ApiError {
        ApiError::internal(err.to_string())
    }
}

#[async_trait]
impl RoleCache for RedisRoleCache {
    async fn put(&self, uid: i64, roles: HashSet<String>, ttl: Duration) -> Result<(), ApiError> {
        let payload = bincode::serialize(&roles.into_iter().collect::<Vec<_>>()).map_err(Self::to_api_error)?;
        let ttl_secs = ttl.as_secs().max(1);
        self.connection.clone().set_ex(self.key(uid), payload, ttl_secs).await.map_err(Self::to_api_error)
    }

    async fn get(&self, uid: i64) -> Result<Option<HashSet<String>>, ApiError> {
        let raw: Option<Vec<u8>> = self.connection.clone().get(self.key(uid)).await.map_err(Self::to_api_error)?;
        match raw {
            Some(bytes) => {
                let roles: Vec<String> = bincode::deserialize(&bytes).map_err(Self::to_api_error)?;
                Ok(Some(roles.into_iter().collect()))
            }
            None => Ok(None),
        }
    }

    async fn clear(&self, uid: i64) -> Result<(), ApiError> {
        self.connection.clone().del(self.key(uid)).await.map_err(Self::to_api_error)
    }
}
