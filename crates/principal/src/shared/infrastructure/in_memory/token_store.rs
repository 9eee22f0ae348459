//! In-memory `TokenStore`. `try_mark_used` holds the map's mutex for its
//! entire check-then-set so concurrent callers racing the same id really do
//! serialize on one winner (`spec.md` §5: "compare-and-set on the row's
//! status column").

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;
use kernel::ApiError;

use crate::domain::{TokenRecord, TokenStatus};
use crate::shared::application::{NewTokenRecord, TokenStore};

#[derive(Default)]
pub struct InMemoryTokenStore {
    rows: Mutex<BTreeMap<i64, TokenRecord>>,
    next_id: AtomicI64,
}

impl InMemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TokenStore for InMemoryTokenStore {
    async fn insert(&self, record: NewTokenRecord) -> Result<TokenRecord, ApiError> {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
        let row = TokenRecord {
            id,
            access_token: record.access_token,
            refresh_token: record.refresh_token,
            status: TokenStatus::Unused,
            user_id: record.user_id,
            username: record.username,
            domain: record.domain,
            context: record.context,
            created_at: Utc::now(),
        };
        self.rows.lock().unwrap().insert(id, row.clone());
        Ok(row)
    }

    async fn get_by_refresh_token(&self, refresh_token: &str) -> Result<Option<TokenRecord>, ApiError> {
        Ok(self.rows.lock().unwrap().values().find(|r| r.refresh_token == refresh_token).cloned())
    }

    async fn try_mark_used(&self, id: i64) -> Result<bool, ApiError> {
        let mut rows = self.rows.lock().unwrap();
        match rows.get_mut(&id) {
            Some(row) if matches!(row.status, TokenStatus::Unused) => {
                row.status = TokenStatus::Used;
                Ok(true)
            }
            _ => Ok(false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::RequestContext;

    fn new_record() -> NewTokenRecord {
        NewTokenRecord {
            access_token: "a1".to_string(),
            refresh_token: "r1".to_string(),
            user_id: 1,
            username: "alice".to_string(),
            domain: "default".to_string(),
            context: RequestContext::default(),
        }
    }

    #[tokio::test]
    async fn inserted_rows_start_unused_and_are_findable_by_refresh_token() {
        let store = InMemoryTokenStore::new();
        let row = store.insert(new_record()).await.unwrap();
        assert!(matches!(row.status, TokenStatus::Unused));

        let found = store.get_by_refresh_token("r1").await.unwrap().unwrap();
        assert_eq!(found.id, row.id);
    }

    #[tokio::test]
    async fn try_mark_used_succeeds_once_then_fails() {
        let store = InMemoryTokenStore::new();
        let row = store.insert(new_record()).await.unwrap();

        assert!(store.try_mark_used(row.id).await.unwrap());
        assert!(!store.try_mark_used(row.id).await.unwrap());
    }

    #[tokio::test]
    async fn try_mark_used_on_a_missing_id_returns_false() {
        let store = InMemoryTokenStore::new();
        assert!(!store.try_mark_used(9999).await.unwrap());
    }

    #[tokio::test]
    async fn exactly_one_concurrent_mark_used_call_wins() {
        use std::sync::Arc;

        let store = Arc::new(InMemoryTokenStore::new());
        let row = store.insert(new_record()).await.unwrap();

        let mut handles = Vec::new();
        for _ in 0..16 {
            let store = Arc::clone(&store);
            handles.push(tokio::spawn(async move { store.try_mark_used(row.id).await.unwrap() }));
        }

        let mut successes = 0;
        for handle in handles {
            if handle.await.unwrap() {
                successes += 1;
            }
        }
        assert_eq!(successes, 1);
    }
}
