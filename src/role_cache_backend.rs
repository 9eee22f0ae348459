//! Runtime selection between `principal`'s two `RoleCache` adapters.
//!
//! The teacher resolves adapter choice at compile time (`CompositionRoot::
//! production<S>` is generic over the caller's chosen storage type); here
//! the choice (`config.runtime.role_cache_backend`) only becomes known at
//! startup, once `Config` has been loaded, so `AppState` holds this enum
//! rather than being generic over the role cache type.

use std::collections::HashSet;
use std::time::Duration;

use async_trait::async_trait;
use kernel::ApiError;
use principal::RoleCache;
use principal::shared::infrastructure::RedisRoleCache;
use principal::shared::infrastructure::in_memory::InMemoryRoleCache;

pub enum RoleCacheBackend {
    InMemory(InMemoryRoleCache),
    Redis(RedisRoleCache),
}

#[async_trait]
impl RoleCache for RoleCacheBackend {
    async fn put(&self, uid: i64, roles: HashSet<String>, ttl: Duration) -> Result<(), ApiError> {
        match self {
            Self::InMemory(cache) => cache.put(uid, roles, ttl).await,
            Self::Redis(cache) => cache.put(uid, roles, ttl).await,
        }
    }

    async fn get(&self, uid: i64) -> Result<Option<HashSet<String>>, ApiError> {
        match self {
            Self::InMemory(cache) => cache.get(uid).await,
            Self::Redis(cache) => cache.get(uid).await,
        }
    }

    async fn clear(&self, uid: i64) -> Result<(), ApiError> {
        match self {
            Self::InMemory(cache) => cache.clear(uid).await,
            Self::Redis(cache) => cache.clear(uid).await,
        }
    }
}
