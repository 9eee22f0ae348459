//! `RelationCreate` (`spec.md` §6): inserts one `ptype = "g"` row, i.e. a
//! role-inheritance edge, reusing the same semantic mapper as policy rows.

use std::sync::Arc;

use async_trait::async_trait;
use cqrs::CommandHandler;
use kernel::{ApiError, EventPublisher, RelationId, ReloadCoordinator};
use tracing::{info, instrument, warn};

use crate::domain::to_positional;
use crate::events::{RoleRelationChanged, RuleChangeKind};
use crate::shared::application::RuleStore;

use super::dto::{RelationCreateCommand, RelationCreatedDto};
use super::error::RelationCreateError;

pub struct RelationCreateUseCase<S, B, R> {
    store: Arc<S>,
    events: Arc<B>,
    reload: Arc<R>,
}

impl<S, B, R> RelationCreateUseCase<S, B, R>
where
    S: RuleStore,
    B: EventPublisher,
    R: ReloadCoordinator,
{
    pub fn new(store: Arc<S>, events: Arc<B>, reload: Arc<R>) -> Self {
        Self { store, events, reload }
    }

    #[instrument(name = "relation_create", skip(self, command))]
    pub async fn handle(&self, command: RelationCreateCommand) -> Result<RelationCreatedDto, RelationCreateError> {
        let new_rule = to_positional(command.relation.into_policy_rule_dto());
        let inserted = self.store.insert(new_rule).await?;
        let relation_id = RelationId::from(inserted.id);

        let reloaded = self.reload.reload().await;
        if !reloaded {
            warn!(relation_id = %relation_id, "enforcer reload failed after creating role relation");
        }

        let _ = self
            .events
            .publish(RoleRelationChanged { relation_id: inserted.id, kind: RuleChangeKind::Created })
            .await;

        info!(relation_id = %relation_id, reloaded, "role relation created");
        Ok(RelationCreatedDto { id: relation_id, reloaded })
    }
}

#[async_trait]
impl<S, B, R> CommandHandler<RelationCreateCommand> for RelationCreateUseCase<S, B, R>
where
    S: RuleStore,
    B: EventPublisher,
    R: ReloadCoordinator,
{
    async fn execute(&self, command: RelationCreateCommand) -> Result<RelationCreatedDto, ApiError> {
        self.handle(command).await.map_err(Into::into)
    }
}
