//! `PagePolicies` (`spec.md` §6): paginated, filterable listing of `ptype =
//! "p"` rows, returned in their typed DTO form via the semantic mapper.

use std::sync::Arc;

use async_trait::async_trait;
use cqrs::QueryHandler;
use kernel::ApiError;
use tracing::instrument;

use crate::domain::{to_dto, PType};
use crate::shared::application::RuleStore;

use super::dto::{PagePoliciesQuery, PagePoliciesResultDto};
use super::error::PagePoliciesError;

pub struct PagePoliciesUseCase<S> {
    store: Arc<S>,
}

impl<S: RuleStore> PagePoliciesUseCase<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    #[instrument(name = "page_policies", skip(self, query))]
    pub async fn handle(&self, query: PagePoliciesQuery) -> Result<PagePoliciesResultDto, PagePoliciesError> {
        let mut filter = query.filter;
        filter.ptype = Some(PType::P);

        let page = self.store.page(filter, query.page).await?;
        Ok(PagePoliciesResultDto {
            items: page.items.into_iter().map(to_dto).collect(),
            current: page.current,
            size: page.size,
            total: page.total,
        })
    }
}

#[async_trait]
impl<S: RuleStore> QueryHandler<PagePoliciesQuery> for PagePoliciesUseCase<S> {
    async fn execute(&self, query: PagePoliciesQuery) -> Result<PagePoliciesResultDto, ApiError> {
        self.handle(query).await.map_err(Into::into)
    }
}
