//! `PageModelVersions` (`spec.md` §6): paginated listing of `model.conf`
//! versions across every status (draft, active, archived).

use std::sync::Arc;

use async_trait::async_trait;
use cqrs::QueryHandler;
use kernel::ApiError;
use tracing::instrument;

use crate::shared::application::ModelConfigStore;

use super::dto::{PageModelVersionsQuery, PageModelVersionsResultDto};
use super::error::PageModelVersionsError;

pub struct PageModelVersionsUseCase<S> {
    store: Arc<S>,
}

impl<S: ModelConfigStore> PageModelVersionsUseCase<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    #[instrument(name = "page_model_versions", skip(self, query))]
    pub async fn handle(&self, query: PageModelVersionsQuery) -> Result<PageModelVersionsResultDto, PageModelVersionsError> {
        let page = self.store.page(query.page).await?;
        Ok(PageModelVersionsResultDto { items: page.items, current: page.current, size: page.size, total: page.total })
    }
}

#[async_trait]
impl<S: ModelConfigStore> QueryHandler<PageModelVersionsQuery> for PageModelVersionsUseCase<S> {
    async fn execute(&self, query: PageModelVersionsQuery) -> Result<PageModelVersionsResultDto, ApiError> {
        self.handle(query).await.map_err(Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ModelConfigVersion;
    use crate::shared::application::MockModelConfigStore;
    use kernel::{ModelVersionId, PageRequest, PageResult};

    #[tokio::test]
    async fn pages_model_versions() {
        let mut store = MockModelConfigStore::new();
        store.expect_page().returning(|request| {
            Ok(PageResult::new(vec![ModelConfigVersion::new_draft(ModelVersionId::new(1), 1, "m", "", "u1")], request, 1))
        });

        let use_case = PageModelVersionsUseCase::new(Arc::new(store));
        let result = use_case.handle(PageModelVersionsQuery { page: PageRequest::normalize(None, None) }).await.unwrap();
        assert_eq!(result.items.len(), 1);
        assert_eq!(result.total, 1);
    }
}
