//! `ModelRollback` (`spec.md` §6, scenario S2): re-activates any existing
//! version, draft or archived (`spec.md` §9 open question #3 — the source
//! calls `setActiveVersion(id)` without checking prior status). Mechanically
//! the same demote-then-promote swap as `ModelPublish`, plus an enforcer
//! reload and an approval stamp recording who performed the rollback.

use std::sync::Arc;

use async_trait::async_trait;
use cqrs::CommandHandler;
use kernel::{ApiError, EventPublisher, ReloadCoordinator};
use tracing::{info, instrument, warn};

use crate::events::ModelVersionRolledBack;
use crate::shared::application::ModelConfigStore;

use super::dto::{ModelRollbackCommand, ModelRolledBackDto};
use super::error::ModelRollbackError;

pub struct ModelRollbackUseCase<S, B, R> {
    store: Arc<S>,
    events: Arc<B>,
    reload: Arc<R>,
}

impl<S, B, R> ModelRollbackUseCase<S, B, R>
where
    S: ModelConfigStore,
    B: EventPublisher,
    R: ReloadCoordinator,
{
    pub fn new(store: Arc<S>, events: Arc<B>, reload: Arc<R>) -> Self {
        Self { store, events, reload }
    }

    #[instrument(name = "model_rollback", skip(self, command))]
    pub async fn handle(&self, command: ModelRollbackCommand) -> Result<ModelRolledBackDto, ModelRollbackError> {
        self.store
            .get(command.id)
            .await?
            .ok_or_else(|| ModelRollbackError::Store(ApiError::not_found("model config version", command.id)))?;

        let activated = self.store.set_active_version(command.id).await?;
        self.store.patch_approval(command.id, command.operator).await?;

        let reloaded = self.reload.reload().await;
        if !reloaded {
            warn!(version_id = %activated.id, "enforcer reload failed after rolling back model version");
        }

        let _ = self.events.publish(ModelVersionRolledBack { version_id: activated.id }).await;

        info!(version_id = %activated.id, reloaded, "model version rolled back");
        Ok(ModelRolledBackDto { id: activated.id, reloaded })
    }
}

#[async_trait]
impl<S, B, R> CommandHandler<ModelRollbackCommand> for ModelRollbackUseCase<S, B, R>
where
    S: ModelConfigStore,
    B: EventPublisher,
    R: ReloadCoordinator,
{
    async fn execute(&self, command: ModelRollbackCommand) -> Result<ModelRolledBackDto, ApiError> {
        self.handle(command).await.map_err(Into::into)
    }
}
