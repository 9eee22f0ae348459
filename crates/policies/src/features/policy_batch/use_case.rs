//! `PolicyBatch` (`spec.md` §6): `{policies[], operation}` where
//! `operation ∈ {"add","delete"}`. For `"add"` every DTO is translated and
//! inserted in one all-or-nothing call; for `"delete"` every DTO's `id` is
//! collected and the ids are deleted in one call. An empty `policies` list
//! or any other `operation` value fails `BadRequest` before the store is
//! touched (`spec.md` §7, §8). The enforcer reloads exactly once after the
//! batch completes without error.

use std::sync::Arc;

use async_trait::async_trait;
use cqrs::CommandHandler;
use kernel::{ApiError, EventPublisher, ReloadCoordinator};
use tracing::{info, instrument, warn};

use crate::domain::{to_positional, PType};
use crate::events::{PolicyBatchApplied, PolicyRuleChanged, RuleChangeKind};
use crate::shared::application::RuleStore;

use super::dto::{PolicyBatchCommand, PolicyBatchResultDto};
use super::error::PolicyBatchError;

pub struct PolicyBatchUseCase<S, B, R> {
    store: Arc<S>,
    events: Arc<B>,
    reload: Arc<R>,
}

impl<S, B, R> PolicyBatchUseCase<S, B, R>
where
    S: RuleStore,
    B: EventPublisher,
    R: ReloadCoordinator,
{
    pub fn new(store: Arc<S>, events: Arc<B>, reload: Arc<R>) -> Self {
        Self { store, events, reload }
    }

    #[instrument(name = "policy_batch", skip(self, command), fields(operation = %command.operation, items = command.policies.len()))]
    pub async fn handle(&self, command: PolicyBatchCommand) -> Result<PolicyBatchResultDto, PolicyBatchError> {
        if command.policies.is_empty() {
            return Err(PolicyBatchError::EmptyBatch);
        }

        match command.operation.as_str() {
            "add" => self.handle_add(command.policies).await,
            "delete" => self.handle_delete(command.policies).await,
            other => Err(PolicyBatchError::InvalidOperation(other.to_string())),
        }
    }

    async fn handle_add(&self, policies: Vec<crate::domain::PolicyRuleDto>) -> Result<PolicyBatchResultDto, PolicyBatchError> {
        for (i, rule) in policies.iter().enumerate() {
            if rule.ptype != PType::P {
                return Err(PolicyBatchError::WrongPType(i));
            }
        }

        let new_rules = policies.into_iter().map(to_positional).collect();
        let inserted = self.store.insert_batch(new_rules).await?;

        let reloaded = self.reload.reload().await;
        if !reloaded {
            warn!(added = inserted.len(), "enforcer reload failed after policy batch add");
        }

        for rule in &inserted {
            let _ = self.events.publish(PolicyRuleChanged { rule_id: rule.id, kind: RuleChangeKind::Created }).await;
        }
        let _ = self
            .events
            .publish(PolicyBatchApplied { operation: "add".to_string(), rule_ids: inserted.iter().map(|r| r.id).collect() })
            .await;

        info!(added = inserted.len(), reloaded, "policy batch add applied");
        Ok(PolicyBatchResultDto { added: inserted.into_iter().map(|r| r.id).collect(), removed_count: 0, reloaded })
    }

    async fn handle_delete(&self, policies: Vec<crate::domain::PolicyRuleDto>) -> Result<PolicyBatchResultDto, PolicyBatchError> {
        let mut ids = Vec::with_capacity(policies.len());
        for (i, rule) in policies.iter().enumerate() {
            ids.push(rule.id.ok_or(PolicyBatchError::MissingId(i))?);
        }

        let removed_count = self.store.delete_batch(ids.clone()).await?;

        let reloaded = self.reload.reload().await;
        if !reloaded {
            warn!(removed = removed_count, "enforcer reload failed after policy batch delete");
        }

        for id in &ids {
            let _ = self.events.publish(PolicyRuleChanged { rule_id: *id, kind: RuleChangeKind::Deleted }).await;
        }
        let _ = self.events.publish(PolicyBatchApplied { operation: "delete".to_string(), rule_ids: ids.clone() }).await;

        info!(removed = removed_count, reloaded, "policy batch delete applied");
        Ok(PolicyBatchResultDto { added: Vec::new(), removed_count, reloaded })
    }
}

#[async_trait]
impl<S, B, R> CommandHandler<PolicyBatchCommand> for PolicyBatchUseCase<S, B, R>
where
    S: RuleStore,
    B: EventPublisher,
    R: ReloadCoordinator,
{
    async fn execute(&self, command: PolicyBatchCommand) -> Result<PolicyBatchResultDto, ApiError> {
        self.handle(command).await.map_err(Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::PolicyRuleDto;
    use crate::shared::application::MockRuleStore;
    use kernel::{InMemoryEventBus, NoopReloadCoordinator, RuleId};

    #[tokio::test]
    async fn adds_every_item_in_one_call() {
        let mut store = MockRuleStore::new();
        store.expect_insert_batch().returning(|rules| {
            Ok(rules
                .into_iter()
                .enumerate()
                .map(|(i, r)| r.with_id(RuleId::new(i as i64 + 1)))
                .collect())
        });

        let use_case = PolicyBatchUseCase::new(Arc::new(store), Arc::new(InMemoryEventBus::new()), Arc::new(NoopReloadCoordinator));
        let result = use_case
            .handle(PolicyBatchCommand {
                policies: vec![
                    PolicyRuleDto::policy("r1", "/a", "GET"),
                    PolicyRuleDto::policy("r1", "/b", "GET"),
                ],
                operation: "add".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(result.added.len(), 2);
        assert_eq!(result.removed_count, 0);
        assert!(result.reloaded);
    }

    #[tokio::test]
    async fn deletes_every_id_in_one_call() {
        let mut store = MockRuleStore::new();
        store.expect_delete_batch().returning(|ids| Ok(ids.len()));

        let use_case = PolicyBatchUseCase::new(Arc::new(store), Arc::new(InMemoryEventBus::new()), Arc::new(NoopReloadCoordinator));
        let mut a = PolicyRuleDto::policy("r1", "/a", "GET");
        a.id = Some(RuleId::new(1));
        let mut b = PolicyRuleDto::policy("r1", "/b", "GET");
        b.id = Some(RuleId::new(2));

        let result = use_case
            .handle(PolicyBatchCommand { policies: vec![a, b], operation: "delete".to_string() })
            .await
            .unwrap();

        assert_eq!(result.removed_count, 2);
        assert!(result.reloaded);
    }

    #[tokio::test]
    async fn rejects_a_g_row_in_the_add_list_before_touching_the_store() {
        let store = MockRuleStore::new();
        let use_case = PolicyBatchUseCase::new(Arc::new(store), Arc::new(InMemoryEventBus::new()), Arc::new(NoopReloadCoordinator));

        let mut bad = PolicyRuleDto::policy("alice", "/docs/1", "read");
        bad.ptype = PType::G;

        let err = use_case
            .handle(PolicyBatchCommand { policies: vec![bad], operation: "add".to_string() })
            .await
            .unwrap_err();
        assert!(matches!(err, PolicyBatchError::WrongPType(0)));
    }

    #[tokio::test]
    async fn deleting_an_item_without_an_id_is_a_bad_request() {
        let store = MockRuleStore::new();
        let use_case = PolicyBatchUseCase::new(Arc::new(store), Arc::new(InMemoryEventBus::new()), Arc::new(NoopReloadCoordinator));

        let err = use_case
            .handle(PolicyBatchCommand {
                policies: vec![PolicyRuleDto::policy("r1", "/a", "GET")],
                operation: "delete".to_string(),
            })
            .await
            .unwrap_err();
        assert!(matches!(err, PolicyBatchError::MissingId(0)));
    }

    #[tokio::test]
    async fn an_unknown_operation_is_a_bad_request_before_touching_the_store() {
        let store = MockRuleStore::new();
        let use_case = PolicyBatchUseCase::new(Arc::new(store), Arc::new(InMemoryEventBus::new()), Arc::new(NoopReloadCoordinator));

        let err = use_case
            .handle(PolicyBatchCommand { policies: vec![PolicyRuleDto::policy("r1", "/a", "GET")], operation: "frobnicate".to_string() })
            .await
            .unwrap_err();
        assert!(matches!(err, PolicyBatchError::InvalidOperation(op) if op == "frobnicate"));
    }

    #[tokio::test]
    async fn an_empty_batch_is_a_bad_request_before_touching_the_store_or_operation() {
        let store = MockRuleStore::new();
        let use_case = PolicyBatchUseCase::new(Arc::new(store), Arc::new(InMemoryEventBus::new()), Arc::new(NoopReloadCoordinator));

        let err = use_case.handle(PolicyBatchCommand { policies: vec![], operation: "add".to_string() }).await.unwrap_err();
        assert!(matches!(err, PolicyBatchError::EmptyBatch));
    }
}
