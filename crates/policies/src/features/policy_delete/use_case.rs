//! `PolicyDelete` (`spec.md` §6): removes one rule row by id.

use std::sync::Arc;

use async_trait::async_trait;
use cqrs::CommandHandler;
use kernel::{ApiError, EventPublisher, ReloadCoordinator};
use tracing::{info, instrument, warn};

use crate::events::{PolicyRuleChanged, RuleChangeKind};
use crate::shared::application::RuleStore;

use super::dto::PolicyDeleteCommand;
use super::error::PolicyDeleteError;

pub struct PolicyDeleteUseCase<S, B, R> {
    store: Arc<S>,
    events: Arc<B>,
    reload: Arc<R>,
}

impl<S, B, R> PolicyDeleteUseCase<S, B, R>
where
    S: RuleStore,
    B: EventPublisher,
    R: ReloadCoordinator,
{
    pub fn new(store: Arc<S>, events: Arc<B>, reload: Arc<R>) -> Self {
        Self { store, events, reload }
    }

    #[instrument(name = "policy_delete", skip(self, command))]
    pub async fn handle(&self, command: PolicyDeleteCommand) -> Result<(), PolicyDeleteError> {
        let deleted = self.store.delete(command.id).await?;
        if !deleted {
            return Err(PolicyDeleteError::Store(ApiError::not_found("policy rule", command.id)));
        }

        let reloaded = self.reload.reload().await;
        if !reloaded {
            warn!(rule_id = %command.id, "enforcer reload failed after deleting policy rule");
        }

        let _ = self
            .events
            .publish(PolicyRuleChanged { rule_id: command.id, kind: RuleChangeKind::Deleted })
            .await;
        info!(rule_id = %command.id, reloaded, "policy rule deleted");
        Ok(())
    }
}

#[async_trait]
impl<S, B, R> CommandHandler<PolicyDeleteCommand> for PolicyDeleteUseCase<S, B, R>
where
    S: RuleStore,
    B: EventPublisher,
    R: ReloadCoordinator,
{
    async fn execute(&self, command: PolicyDeleteCommand) -> Result<(), ApiError> {
        self.handle(command).await.map_err(Into::into)
    }
}
