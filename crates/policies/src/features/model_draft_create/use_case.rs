//! `ModelDraftCreate` (`spec.md` §6): validates a new `model.conf` text and
//! stores it as a draft version. Drafts never affect the running enforcer —
//! only `ModelPublish` (and `ModelRollback`) do.

use std::sync::Arc;

use async_trait::async_trait;
use cqrs::CommandHandler;
use kernel::{ApiError, EventPublisher};
use tracing::{info, instrument};

use crate::domain::ModelConfigVersion;
use crate::events::ModelVersionDrafted;
use crate::shared::application::ModelConfigStore;
use crate::shared::infrastructure::validator::validate_model_text;

use super::dto::{ModelDraftCreateCommand, ModelDraftCreatedDto};
use super::error::ModelDraftCreateError;
use super::ports::ModelVersionIdGenerator;

pub struct ModelDraftCreateUseCase<G, S, B> {
    id_generator: Arc<G>,
    store: Arc<S>,
    events: Arc<B>,
}

impl<G, S, B> ModelDraftCreateUseCase<G, S, B>
where
    G: ModelVersionIdGenerator,
    S: ModelConfigStore,
    B: EventPublisher,
{
    pub fn new(id_generator: Arc<G>, store: Arc<S>, events: Arc<B>) -> Self {
        Self { id_generator, store, events }
    }

    #[instrument(name = "model_draft_create", skip(self, command))]
    pub async fn handle(&self, command: ModelDraftCreateCommand) -> Result<ModelDraftCreatedDto, ModelDraftCreateError> {
        validate_model_text(&command.content).await?;

        let id = self.id_generator.generate().await;
        let version = self.store.get_next_version().await?;
        let draft = ModelConfigVersion::new_draft(id, version, command.content, command.remark, command.created_by);
        let inserted = self.store.insert_draft(draft).await?;

        let _ = self.events.publish(ModelVersionDrafted { version_id: inserted.id }).await;

        info!(version_id = %inserted.id, version = inserted.version, "model draft created");
        Ok(ModelDraftCreatedDto { id: inserted.id, version: inserted.version })
    }
}

#[async_trait]
impl<G, S, B> CommandHandler<ModelDraftCreateCommand> for ModelDraftCreateUseCase<G, S, B>
where
    G: ModelVersionIdGenerator,
    S: ModelConfigStore,
    B: EventPublisher,
{
    async fn execute(&self, command: ModelDraftCreateCommand) -> Result<ModelDraftCreatedDto, ApiError> {
        self.handle(command).await.map_err(Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::super::adapter::SequentialModelVersionIdGenerator;
    use crate::shared::application::MockModelConfigStore;
    use kernel::InMemoryEventBus;

    const VALID_MODEL: &str = "[request_definition]\nr = sub, obj, act\n[policy_definition]\np = sub, obj, act\n[matchers]\nm = r.sub == p.sub\n";

    fn command(content: &str) -> ModelDraftCreateCommand {
        ModelDraftCreateCommand { content: content.to_string(), remark: String::new(), created_by: "u1".to_string() }
    }

    #[tokio::test]
    async fn rejects_a_model_missing_required_sections() {
        let store = MockModelConfigStore::new();
        let use_case =
            ModelDraftCreateUseCase::new(Arc::new(SequentialModelVersionIdGenerator::new()), Arc::new(store), Arc::new(InMemoryEventBus::new()));

        let err = use_case.handle(command("garbage")).await.unwrap_err();
        assert!(matches!(err, ModelDraftCreateError::Invalid(_)));
    }

    #[tokio::test]
    async fn stores_a_valid_draft_as_version_one_when_the_store_is_empty() {
        let mut store = MockModelConfigStore::new();
        store.expect_get_next_version().returning(|| Ok(1));
        store.expect_insert_draft().returning(|draft| Ok(draft));

        let use_case =
            ModelDraftCreateUseCase::new(Arc::new(SequentialModelVersionIdGenerator::new()), Arc::new(store), Arc::new(InMemoryEventBus::new()));
        let result = use_case.handle(command(VALID_MODEL)).await.unwrap();
        assert_eq!(result.id, kernel::ModelVersionId::new(1));
        assert_eq!(result.version, 1);
    }
}
