//! `PolicyCreate` (`spec.md` §6): inserts one `ptype = "p"` rule row.

use std::sync::Arc;

use async_trait::async_trait;
use cqrs::CommandHandler;
use kernel::{ApiError, EventPublisher, ReloadCoordinator};
use tracing::{info, instrument, warn};

use crate::domain::{to_positional, PType};
use crate::events::{PolicyRuleChanged, RuleChangeKind};
use crate::shared::application::RuleStore;

use super::dto::{PolicyCreateCommand, PolicyCreatedDto};
use super::error::PolicyCreateError;

pub struct PolicyCreateUseCase<S, B, R> {
    store: Arc<S>,
    events: Arc<B>,
    reload: Arc<R>,
}

impl<S, B, R> PolicyCreateUseCase<S, B, R>
where
    S: RuleStore,
    B: EventPublisher,
    R: ReloadCoordinator,
{
    pub fn new(store: Arc<S>, events: Arc<B>, reload: Arc<R>) -> Self {
        Self { store, events, reload }
    }

    #[instrument(name = "policy_create", skip(self, command))]
    pub async fn handle(&self, command: PolicyCreateCommand) -> Result<PolicyCreatedDto, PolicyCreateError> {
        if command.rule.ptype != PType::P {
            return Err(PolicyCreateError::WrongPType);
        }

        let new_rule = to_positional(command.rule);
        let inserted = self.store.insert(new_rule).await?;

        let reloaded = self.reload.reload().await;
        if !reloaded {
            warn!(rule_id = %inserted.id, "enforcer reload failed after creating policy rule");
        }

        let _ = self
            .events
            .publish(PolicyRuleChanged { rule_id: inserted.id, kind: RuleChangeKind::Created })
            .await;

        info!(rule_id = %inserted.id, reloaded, "policy rule created");
        Ok(PolicyCreatedDto { id: inserted.id, reloaded })
    }
}

#[async_trait]
impl<S, B, R> CommandHandler<PolicyCreateCommand> for PolicyCreateUseCase<S, B, R>
where
    S: RuleStore,
    B: EventPublisher,
    R: ReloadCoordinator,
{
    async fn execute(&self, command: PolicyCreateCommand) -> Result<PolicyCreatedDto, ApiError> {
        self.handle(command).await.map_err(Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::PolicyRuleDto;
    use crate::shared::application::MockRuleStore;
    use kernel::{InMemoryEventBus, NoopReloadCoordinator};

    #[tokio::test]
    async fn creates_a_p_row_and_publishes_an_event() {
        let mut store = MockRuleStore::new();
        store.expect_insert().returning(|rule| {
            Ok(rule.with_id(kernel::RuleId::new(1)))
        });

        let use_case = PolicyCreateUseCase::new(Arc::new(store), Arc::new(InMemoryEventBus::new()), Arc::new(NoopReloadCoordinator));
        let result = use_case
            .handle(PolicyCreateCommand { rule: PolicyRuleDto::policy("alice", "/docs/1", "read") })
            .await
            .unwrap();

        assert_eq!(result.id, kernel::RuleId::new(1));
        assert!(result.reloaded);
    }

    #[tokio::test]
    async fn rejects_a_g_row() {
        let store = MockRuleStore::new();
        let use_case = PolicyCreateUseCase::new(Arc::new(store), Arc::new(InMemoryEventBus::new()), Arc::new(NoopReloadCoordinator));

        let mut rule = PolicyRuleDto::policy("alice", "/docs/1", "read");
        rule.ptype = PType::G;

        let err = use_case.handle(PolicyCreateCommand { rule }).await.unwrap_err();
        assert!(matches!(err, PolicyCreateError::WrongPType));
    }
}
