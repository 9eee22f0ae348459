//! `ModelVersionDetail` (`spec.md` §6): fetches one model-config version by
//! id, 404ing if it doesn't exist.

use std::sync::Arc;

use async_trait::async_trait;
use cqrs::QueryHandler;
use kernel::ApiError;
use tracing::instrument;

use crate::domain::ModelConfigVersion;
use crate::shared::application::ModelConfigStore;

use super::dto::ModelVersionDetailQuery;
use super::error::ModelVersionDetailError;

pub struct ModelVersionDetailUseCase<S> {
    store: Arc<S>,
}

impl<S: ModelConfigStore> ModelVersionDetailUseCase<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    #[instrument(name = "model_version_detail", skip(self, query))]
    pub async fn handle(&self, query: ModelVersionDetailQuery) -> Result<ModelConfigVersion, ModelVersionDetailError> {
        self.store
            .get(query.id)
            .await?
            .ok_or_else(|| ModelVersionDetailError::Store(ApiError::not_found("model config version", query.id)))
    }
}

#[async_trait]
impl<S: ModelConfigStore> QueryHandler<ModelVersionDetailQuery> for ModelVersionDetailUseCase<S> {
    async fn execute(&self, query: ModelVersionDetailQuery) -> Result<ModelConfigVersion, ApiError> {
        self.handle(query).await.map_err(Into::into)
    }
}
