//! `ModelDraftUpdate` (`spec.md` §6): edits a draft's content in place.
//! `InMemoryModelConfigStore::update_draft_content` already enforces the
//! "only drafts are editable" invariant; this layer adds validation.

use std::sync::Arc;

use async_trait::async_trait;
use cqrs::CommandHandler;
use kernel::ApiError;
use tracing::{info, instrument};

use crate::shared::application::ModelConfigStore;
use crate::shared::infrastructure::validator::validate_model_text;

use super::dto::{ModelDraftUpdateCommand, ModelDraftUpdatedDto};
use super::error::ModelDraftUpdateError;

pub struct ModelDraftUpdateUseCase<S> {
    store: Arc<S>,
}

impl<S: ModelConfigStore> ModelDraftUpdateUseCase<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    #[instrument(name = "model_draft_update", skip(self, command))]
    pub async fn handle(&self, command: ModelDraftUpdateCommand) -> Result<ModelDraftUpdatedDto, ModelDraftUpdateError> {
        validate_model_text(&command.content).await?;
        let updated = self.store.update_draft_content(command.id, command.content, command.remark).await?;
        info!(version_id = %updated.id, "model draft updated");
        Ok(ModelDraftUpdatedDto { id: updated.id })
    }
}

#[async_trait]
impl<S: ModelConfigStore> CommandHandler<ModelDraftUpdateCommand> for ModelDraftUpdateUseCase<S> {
    async fn execute(&self, command: ModelDraftUpdateCommand) -> Result<ModelDraftUpdatedDto, ApiError> {
        self.handle(command).await.map_err(Into::into)
    }
}
