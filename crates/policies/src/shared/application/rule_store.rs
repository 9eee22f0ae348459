//! Port for the rule store (C1, `spec.md` §4.1): the persisted collection of
//! `p`/`g` rows every policy and relation command/query ultimately reads or
//! writes through the semantic mapper.

use async_trait::async_trait;
use kernel::{ApiError, PageRequest, PageResult, RuleId};

use crate::domain::{NewRuleTuple, PType, RuleTuple};

/// Filter for `PagePolicies`/`PageRelations` (`spec.md` §6): `ptype` is an
/// exact match, every other populated field is a substring match against the
/// corresponding positional slot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleFilter {
    pub ptype: Option<PType>,
    pub v0: Option<String>,
    pub v1: Option<String>,
    pub v2: Option<String>,
    pub v3: Option<String>,
    pub v4: Option<String>,
    pub v5: Option<String>,
}

impl RuleFilter {
    pub fn matches(&self, rule: &RuleTuple) -> bool {
        if let Some(ptype) = self.ptype {
            if rule.ptype != ptype {
                return false;
            }
        }
        Self::field_matches(&self.v0, &rule.v0)
            && Self::field_matches(&self.v1, &rule.v1)
            && Self::field_matches(&self.v2, &rule.v2)
            && Self::field_matches(&self.v3, &rule.v3)
            && Self::field_matches(&self.v4, &rule.v4)
            && Self::field_matches(&self.v5, &rule.v5)
    }

    fn field_matches(needle: &Option<String>, haystack: &Option<String>) -> bool {
        match needle {
            None => true,
            Some(needle) => haystack.as_deref().is_some_and(|h| h.contains(needle.as_str())),
        }
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RuleStore: Send + Sync {
    async fn insert(&self, rule: NewRuleTuple) -> Result<RuleTuple, ApiError>;

    /// Inserts every row or none: a single failure rolls the whole batch back
    /// (`PolicyBatch`/`spec.md` §6 is all-or-nothing).
    async fn insert_batch(&self, rules: Vec<NewRuleTuple>) -> Result<Vec<RuleTuple>, ApiError>;

    async fn delete(&self, id: RuleId) -> Result<bool, ApiError>;

    async fn delete_batch(&self, ids: Vec<RuleId>) -> Result<usize, ApiError>;

    async fn get(&self, id: RuleId) -> Result<Option<RuleTuple>, ApiError>;

    async fn page(&self, filter: RuleFilter, request: PageRequest) -> Result<PageResult<RuleTuple>, ApiError>;

    /// All rows of one `ptype`, used by the enforcer to load the runtime
    /// policy set without going through pagination.
    async fn all_by_ptype(&self, ptype: PType) -> Result<Vec<RuleTuple>, ApiError>;
}
