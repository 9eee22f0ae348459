//! `ModelPublish` (`spec.md` §6): promotes a draft to active, demoting
//! whatever was active before it, reloads the enforcer, and publishes
//! `ModelVersionPublished` so downstream consumers see it. Publishing a
//! version that is already active is a no-op success (`spec.md` §9 open
//! question #1 — the source calls `setActiveVersion(id)` unconditionally).

use std::sync::Arc;

use async_trait::async_trait;
use cqrs::CommandHandler;
use kernel::{ApiError, EventPublisher, ReloadCoordinator};
use tracing::{info, instrument, warn};

use crate::domain::ModelConfigStatus;
use crate::events::ModelVersionPublished;
use crate::shared::application::ModelConfigStore;
use crate::shared::infrastructure::validator::validate_model_text;

use super::dto::{ModelPublishCommand, ModelPublishedDto};
use super::error::ModelPublishError;

pub struct ModelPublishUseCase<S, B, R> {
    store: Arc<S>,
    events: Arc<B>,
    reload: Arc<R>,
}

impl<S, B, R> ModelPublishUseCase<S, B, R>
where
    S: ModelConfigStore,
    B: EventPublisher,
    R: ReloadCoordinator,
{
    pub fn new(store: Arc<S>, events: Arc<B>, reload: Arc<R>) -> Self {
        Self { store, events, reload }
    }

    #[instrument(name = "model_publish", skip(self, command))]
    pub async fn handle(&self, command: ModelPublishCommand) -> Result<ModelPublishedDto, ModelPublishError> {
        let version = self
            .store
            .get(command.id)
            .await?
            .ok_or_else(|| ModelPublishError::Store(ApiError::not_found("model config version", command.id)))?;

        if version.status == ModelConfigStatus::Active {
            return Ok(ModelPublishedDto { id: version.id, reloaded: true });
        }

        if version.status == ModelConfigStatus::Draft {
            validate_model_text(&version.content).await?;
        }

        let activated = self.store.set_active_version(command.id).await?;
        self.store.patch_approval(command.id, command.approved_by).await?;

        // Store commit already happened; a reload failure is logged but
        // never unwinds the mutation (`spec.md` §5).
        let reloaded = self.reload.reload().await;
        if !reloaded {
            warn!(version_id = %activated.id, "enforcer reload failed after publishing model version");
        }

        let _ = self.events.publish(ModelVersionPublished { version_id: activated.id }).await;

        info!(version_id = %activated.id, reloaded, "model version published");
        Ok(ModelPublishedDto { id: activated.id, reloaded })
    }
}

#[async_trait]
impl<S, B, R> CommandHandler<ModelPublishCommand> for ModelPublishUseCase<S, B, R>
where
    S: ModelConfigStore,
    B: EventPublisher,
    R: ReloadCoordinator,
{
    async fn execute(&self, command: ModelPublishCommand) -> Result<ModelPublishedDto, ApiError> {
        self.handle(command).await.map_err(Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ModelConfigStatus, ModelConfigVersion};
    use crate::shared::application::MockModelConfigStore;
    use kernel::{InMemoryEventBus, ModelVersionId, NoopReloadCoordinator};

    const VALID_MODEL: &str = "[request_definition]\nr = sub, obj, act\n[policy_definition]\np = sub, obj, act\n[matchers]\nm = r.sub == p.sub\n";

    fn command(id: ModelVersionId) -> ModelPublishCommand {
        ModelPublishCommand { id, approved_by: "u2".to_string() }
    }

    #[tokio::test]
    async fn publishes_a_valid_draft() {
        let mut store = MockModelConfigStore::new();
        store.expect_get().returning(|id| Ok(Some(ModelConfigVersion::new_draft(id, 1, VALID_MODEL, "", "u1"))));
        store.expect_set_active_version().returning(|id| {
            Ok(ModelConfigVersion {
                id,
                version: 1,
                content: VALID_MODEL.to_string(),
                status: ModelConfigStatus::Active,
                remark: String::new(),
                created_by: "u1".to_string(),
                created_at: chrono::Utc::now(),
                approved_by: None,
                approved_at: None,
            })
        });
        store.expect_patch_approval().returning(|id, approved_by| {
            Ok(ModelConfigVersion {
                id,
                version: 1,
                content: VALID_MODEL.to_string(),
                status: ModelConfigStatus::Active,
                remark: String::new(),
                created_by: "u1".to_string(),
                created_at: chrono::Utc::now(),
                approved_by: Some(approved_by),
                approved_at: Some(chrono::Utc::now()),
            })
        });

        let use_case = ModelPublishUseCase::new(Arc::new(store), Arc::new(InMemoryEventBus::new()), Arc::new(NoopReloadCoordinator));
        let result = use_case.handle(command(ModelVersionId::new(1))).await.unwrap();
        assert_eq!(result.id, ModelVersionId::new(1));
        assert!(result.reloaded);
    }

    #[tokio::test]
    async fn publishing_an_already_active_version_is_a_no_op_success() {
        let mut store = MockModelConfigStore::new();
        store.expect_get().returning(|id| {
            Ok(Some(ModelConfigVersion {
                id,
                version: 1,
                content: VALID_MODEL.to_string(),
                status: ModelConfigStatus::Active,
                remark: String::new(),
                created_by: "u1".to_string(),
                created_at: chrono::Utc::now(),
                approved_by: Some("u1".to_string()),
                approved_at: Some(chrono::Utc::now()),
            }))
        });
        store.expect_set_active_version().times(0);

        let use_case = ModelPublishUseCase::new(Arc::new(store), Arc::new(InMemoryEventBus::new()), Arc::new(NoopReloadCoordinator));
        let result = use_case.handle(command(ModelVersionId::new(1))).await.unwrap();
        assert_eq!(result.id, ModelVersionId::new(1));
    }

    #[tokio::test]
    async fn missing_version_is_not_found() {
        let mut store = MockModelConfigStore::new();
        store.expect_get().returning(|_| Ok(None));

        let use_case = ModelPublishUseCase::new(Arc::new(store), Arc::new(InMemoryEventBus::new()), Arc::new(NoopReloadCoordinator));
        let err = use_case.handle(command(ModelVersionId::new(1))).await.unwrap_err();
        assert!(matches!(err, ModelPublishError::Store(_)));
    }
}
