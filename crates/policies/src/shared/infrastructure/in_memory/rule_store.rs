//! In-memory `RuleStore` adapter: a process-local reference implementation,
//! good enough for the composition root's default wiring and for feature
//! tests that exercise the use case against a real (if non-durable) store
//! rather than a hand-rolled mock.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use kernel::{ApiError, PageRequest, PageResult, RuleId};

use crate::domain::{NewRuleTuple, PType, RuleTuple};
use crate::shared::application::{RuleFilter, RuleStore};

#[derive(Default)]
pub struct InMemoryRuleStore {
    rows: Mutex<BTreeMap<i64, RuleTuple>>,
    next_id: AtomicI64,
}

impl InMemoryRuleStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn next(&self) -> RuleId {
        RuleId::new(self.next_id.fetch_add(1, Ordering::SeqCst) + 1)
    }
}

#[async_trait]
impl RuleStore for InMemoryRuleStore {
    async fn insert(&self, rule: NewRuleTuple) -> Result<RuleTuple, ApiError> {
        let id = self.next();
        let row = rule.with_id(id);
        self.rows.lock().unwrap().insert(id.value(), row.clone());
        Ok(row)
    }

    async fn insert_batch(&self, rules: Vec<NewRuleTuple>) -> Result<Vec<RuleTuple>, ApiError> {
        let mut rows = self.rows.lock().unwrap();
        let mut inserted = Vec::with_capacity(rules.len());
        for rule in rules {
            let id = RuleId::new(self.next_id.fetch_add(1, Ordering::SeqCst) + 1);
            let row = rule.with_id(id);
            rows.insert(id.value(), row.clone());
            inserted.push(row);
        }
        Ok(inserted)
    }

    async fn delete(&self, id: RuleId) -> Result<bool, ApiError> {
        Ok(self.rows.lock().unwrap().remove(&id.value()).is_some())
    }

    async fn delete_batch(&self, ids: Vec<RuleId>) -> Result<usize, ApiError> {
        let mut rows = self.rows.lock().unwrap();
        Ok(ids.into_iter().filter(|id| rows.remove(&id.value()).is_some()).count())
    }

    async fn get(&self, id: RuleId) -> Result<Option<RuleTuple>, ApiError> {
        Ok(self.rows.lock().unwrap().get(&id.value()).cloned())
    }

    async fn page(&self, filter: RuleFilter, request: PageRequest) -> Result<PageResult<RuleTuple>, ApiError> {
        let rows = self.rows.lock().unwrap();
        let matching: Vec<RuleTuple> = rows.values().filter(|r| filter.matches(r)).cloned().collect();
        let total = matching.len() as u64;
        let offset = request.offset() as usize;
        let items = matching.into_iter().skip(offset).take(request.size as usize).collect();
        Ok(PageResult::new(items, request, total))
    }

    async fn all_by_ptype(&self, ptype: PType) -> Result<Vec<RuleTuple>, ApiError> {
        Ok(self.rows.lock().unwrap().values().filter(|r| r.ptype == ptype).cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn policy_row(subject: &str) -> NewRuleTuple {
        NewRuleTuple {
            ptype: PType::P,
            v0: Some(subject.to_string()),
            v1: Some("/docs".to_string()),
            v2: Some("read".to_string()),
            v3: None,
            v4: None,
            v5: None,
        }
    }

    #[tokio::test]
    async fn insert_assigns_distinct_ids() {
        let store = InMemoryRuleStore::new();
        let a = store.insert(policy_row("alice")).await.unwrap();
        let b = store.insert(policy_row("bob")).await.unwrap();
        assert_ne!(a.id, b.id);
    }

    #[tokio::test]
    async fn no_implicit_dedup_on_identical_rows() {
        let store = InMemoryRuleStore::new();
        let a = store.insert(policy_row("alice")).await.unwrap();
        let b = store.insert(policy_row("alice")).await.unwrap();
        assert_ne!(a.id, b.id);
        let all = store.all_by_ptype(PType::P).await.unwrap();
        assert_eq!(all.len(), 2);
    }

    #[tokio::test]
    async fn delete_batch_counts_only_existing_rows() {
        let store = InMemoryRuleStore::new();
        let a = store.insert(policy_row("alice")).await.unwrap();
        let missing = RuleId::new(9999);
        let deleted = store.delete_batch(vec![a.id, missing]).await.unwrap();
        assert_eq!(deleted, 1);
    }

    #[tokio::test]
    async fn page_filters_by_substring_except_ptype() {
        let store = InMemoryRuleStore::new();
        store.insert(policy_row("alice")).await.unwrap();
        store.insert(policy_row("alicia")).await.unwrap();
        store.insert(policy_row("bob")).await.unwrap();

        let filter = RuleFilter { v0: Some("ali".to_string()), ..Default::default() };
        let page = store.page(filter, PageRequest::normalize(None, None)).await.unwrap();
        assert_eq!(page.total, 2);
    }

    #[tokio::test]
    async fn insert_batch_is_all_or_nothing_on_the_happy_path() {
        let store = InMemoryRuleStore::new();
        let inserted = store.insert_batch(vec![policy_row("alice"), policy_row("bob")]).await.unwrap();
        assert_eq!(inserted.len(), 2);
        assert_eq!(store.all_by_ptype(PType::P).await.unwrap().len(), 2);
    }
}
