//! `RelationDelete` (`spec.md` §6): removes one role-relation row by id.
//! Relations share the rule id space with policy rows (`spec.md` §3), so
//! this delegates to the same `RuleStore::delete`.

use std::sync::Arc;

use async_trait::async_trait;
use cqrs::CommandHandler;
use kernel::{ApiError, EventPublisher, ReloadCoordinator, RuleId};
use tracing::{info, instrument, warn};

use crate::events::{RoleRelationChanged, RuleChangeKind};
use crate::shared::application::RuleStore;

use super::dto::RelationDeleteCommand;
use super::error::RelationDeleteError;

pub struct RelationDeleteUseCase<S, B, R> {
    store: Arc<S>,
    events: Arc<B>,
    reload: Arc<R>,
}

impl<S, B, R> RelationDeleteUseCase<S, B, R>
where
    S: RuleStore,
    B: EventPublisher,
    R: ReloadCoordinator,
{
    pub fn new(store: Arc<S>, events: Arc<B>, reload: Arc<R>) -> Self {
        Self { store, events, reload }
    }

    #[instrument(name = "relation_delete", skip(self, command))]
    pub async fn handle(&self, command: RelationDeleteCommand) -> Result<(), RelationDeleteError> {
        let rule_id = RuleId::from(command.id);
        let deleted = self.store.delete(rule_id).await?;
        if !deleted {
            return Err(RelationDeleteError::Store(ApiError::not_found("role relation", command.id)));
        }

        let reloaded = self.reload.reload().await;
        if !reloaded {
            warn!(relation_id = %command.id, "enforcer reload failed after deleting role relation");
        }

        let _ = self
            .events
            .publish(RoleRelationChanged { relation_id: rule_id, kind: RuleChangeKind::Deleted })
            .await;
        info!(relation_id = %command.id, reloaded, "role relation deleted");
        Ok(())
    }
}

#[async_trait]
impl<S, B, R> CommandHandler<RelationDeleteCommand> for RelationDeleteUseCase<S, B, R>
where
    S: RuleStore,
    B: EventPublisher,
    R: ReloadCoordinator,
{
    async fn execute(&self, command: RelationDeleteCommand) -> Result<(), ApiError> {
        self.handle(command).await.map_err(Into::into)
    }
}
