//! `PageRelations` (`spec.md` §6): paginated, filterable listing of `ptype =
//! "g"` rows, returned as role-relation DTOs via the semantic mapper.

use std::sync::Arc;

use async_trait::async_trait;
use cqrs::QueryHandler;
use kernel::ApiError;
use tracing::instrument;

use crate::domain::{to_dto, PType, RoleRelationDto};
use crate::shared::application::RuleStore;

use super::dto::{PageRelationsQuery, PageRelationsResultDto};
use super::error::PageRelationsError;

pub struct PageRelationsUseCase<S> {
    store: Arc<S>,
}

impl<S: RuleStore> PageRelationsUseCase<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    #[instrument(name = "page_relations", skip(self, query))]
    pub async fn handle(&self, query: PageRelationsQuery) -> Result<PageRelationsResultDto, PageRelationsError> {
        let mut filter = query.filter;
        filter.ptype = Some(PType::G);

        let page = self.store.page(filter, query.page).await?;
        Ok(PageRelationsResultDto {
            items: page.items.into_iter().map(to_dto).map(RoleRelationDto::from_policy_rule_dto).collect(),
            current: page.current,
            size: page.size,
            total: page.total,
        })
    }
}

#[async_trait]
impl<S: RuleStore> QueryHandler<PageRelationsQuery> for PageRelationsUseCase<S> {
    async fn execute(&self, query: PageRelationsQuery) -> Result<PageRelationsResultDto, ApiError> {
        self.handle(query).await.map_err(Into::into)
    }
}
