//! In-memory `RoleCache`: a single `tokio::sync::RwLock`-guarded map keyed by
//! `uid`, each entry stamped with its own expiry instant. Mirrors the
//! expiry-per-entry idiom used for local cache entries elsewhere in the
//! corpus (custom `expires_at: Option<Instant>` beside the cached value,
//! checked on read) rather than a single cache-wide TTL.

use std::collections::HashSet;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use kernel::ApiError;
use tokio::sync::RwLock;

use crate::shared::application::RoleCache;

struct Entry {
    roles: HashSet<String>,
    expires_at: Instant,
}

impl Entry {
    fn still_valid(&self) -> bool {
        Instant::now() < self.expires_at
    }
}

#[derive(Default)]
pub struct InMemoryRoleCache {
    entries: RwLock<std::collections::HashMap<i64, Entry>>,
}

impl InMemoryRoleCache {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl RoleCache for InMemoryRoleCache {
    async fn put(&self, uid: i64, roles: HashSet<String>, ttl: Duration) -> Result<(), ApiError> {
        self.entries.write().await.insert(uid, Entry { roles, expires_at: Instant::now() + ttl });
        Ok(())
    }

    async fn get(&self, uid: i64) -> Result<Option<HashSet<String>>, ApiError> {
        let entries = self.entries.read().await;
        Ok(entries.get(&uid).filter(|e| e.still_valid()).map(|e| e.roles.clone()))
    }

    async fn clear(&self, uid: i64) -> Result<(), ApiError> {
        self.entries.write().await.remove(&uid);
        Ok(())
    }
}
