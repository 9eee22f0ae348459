//! `ModelVersionDiff` (`spec.md` §4.4, scenario S6): line diff between two
//! model-config versions' `content`, via the shared LCS differ.

use std::sync::Arc;

use async_trait::async_trait;
use cqrs::QueryHandler;
use kernel::ApiError;
use tracing::instrument;

use crate::shared::application::ModelConfigStore;
use crate::shared::infrastructure::diff::diff_lines;

use super::dto::{ModelVersionDiffDto, ModelVersionDiffQuery};
use super::error::ModelVersionDiffError;

pub struct ModelVersionDiffUseCase<S> {
    store: Arc<S>,
}

impl<S: ModelConfigStore> ModelVersionDiffUseCase<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    #[instrument(name = "model_version_diff", skip(self, query))]
    pub async fn handle(&self, query: ModelVersionDiffQuery) -> Result<ModelVersionDiffDto, ModelVersionDiffError> {
        let from = self
            .store
            .get(query.from)
            .await?
            .ok_or_else(|| ModelVersionDiffError::Store(ApiError::not_found("model config version", query.from)))?;
        let to = self
            .store
            .get(query.to)
            .await?
            .ok_or_else(|| ModelVersionDiffError::Store(ApiError::not_found("model config version", query.to)))?;

        let diff = diff_lines(&from.content, &to.content);
        Ok(ModelVersionDiffDto { from: query.from, to: query.to, diff })
    }
}

#[async_trait]
impl<S: ModelConfigStore> QueryHandler<ModelVersionDiffQuery> for ModelVersionDiffUseCase<S> {
    async fn execute(&self, query: ModelVersionDiffQuery) -> Result<ModelVersionDiffDto, ApiError> {
        self.handle(query).await.map_err(Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ModelConfigVersion;
    use crate::shared::application::MockModelConfigStore;
    use kernel::ModelVersionId;

    #[tokio::test]
    async fn diffs_two_versions_content() {
        let mut store = MockModelConfigStore::new();
        store.expect_get().returning(|id| {
            let content = if id == ModelVersionId::new(1) { "A\nB" } else { "A\nC" };
            Ok(Some(ModelConfigVersion::new_draft(id, 1, content, "", "u1")))
        });

        let use_case = ModelVersionDiffUseCase::new(Arc::new(store));
        let result = use_case
            .handle(ModelVersionDiffQuery { from: ModelVersionId::new(1), to: ModelVersionId::new(2) })
            .await
            .unwrap();

        assert_eq!(result.diff, "  A\n- B\n+ C");
    }

    #[tokio::test]
    async fn missing_from_version_is_not_found() {
        let mut store = MockModelConfigStore::new();
        store.expect_get().returning(|_| Ok(None));

        let use_case = ModelVersionDiffUseCase::new(Arc::new(store));
        let err = use_case
            .handle(ModelVersionDiffQuery { from: ModelVersionId::new(1), to: ModelVersionId::new(2) })
            .await
            .unwrap_err();
        assert!(matches!(err, ModelVersionDiffError::Store(_)));
    }
}
