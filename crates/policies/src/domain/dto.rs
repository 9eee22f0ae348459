//! Typed administrative DTOs (`spec.md` §6). Administrative operations never
//! surface the positional `v0..v5` form directly; they exchange these.

use kernel::{RelationId, RuleId};
use serde::{Deserialize, Serialize};

use super::rule::PType;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicyRuleDto {
    pub id: Option<RuleId>,
    pub ptype: PType,
    pub subject: Option<String>,
    pub object: Option<String>,
    pub action: Option<String>,
    pub domain: Option<String>,
    pub effect: Option<String>,
    pub v4: Option<String>,
    pub v5: Option<String>,
}

impl PolicyRuleDto {
    pub fn policy(subject: impl Into<String>, object: impl Into<String>, action: impl Into<String>) -> Self {
        Self {
            id: None,
            ptype: PType::P,
            subject: Some(subject.into()),
            object: Some(object.into()),
            action: Some(action.into()),
            domain: None,
            effect: None,
            v4: None,
            v5: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleRelationDto {
    pub id: Option<RelationId>,
    pub child_subject: String,
    pub parent_role: String,
    pub domain: Option<String>,
}

impl RoleRelationDto {
    /// Relations are policy rule tuples with `ptype = g`; this lets
    /// `RelationCreate`/`RelationDelete` reuse the same semantic mapper
    /// (`spec.md` §4.3) instead of duplicating the folding logic.
    pub fn into_policy_rule_dto(self) -> PolicyRuleDto {
        PolicyRuleDto {
            id: self.id.map(RuleId::from),
            ptype: PType::G,
            subject: Some(self.child_subject),
            object: Some(self.parent_role),
            action: None,
            domain: self.domain,
            effect: None,
            v4: None,
            v5: None,
        }
    }

    pub fn from_policy_rule_dto(dto: PolicyRuleDto) -> Self {
        Self {
            id: dto.id.map(RelationId::from),
            child_subject: dto.subject.unwrap_or_default(),
            parent_role: dto.object.unwrap_or_default(),
            domain: dto.domain,
        }
    }
}
