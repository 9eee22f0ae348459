use cqrs::Query;
use kernel::PageRequest;

use crate::domain::RoleRelationDto;
use crate::shared::application::RuleFilter;

#[derive(Debug, Clone)]
pub struct PageRelationsQuery {
    pub filter: RuleFilter,
    pub page: PageRequest,
}

impl Default for PageRelationsQuery {
    fn default() -> Self {
        Self { filter: RuleFilter::default(), page: PageRequest::normalize(None, None) }
    }
}

impl Query for PageRelationsQuery {
    type Output = PageRelationsResultDto;
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageRelationsResultDto {
    pub items: Vec<RoleRelationDto>,
    pub current: u32,
    pub size: u32,
    pub total: u64,
}
