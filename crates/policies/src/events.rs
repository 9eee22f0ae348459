//! Domain events published by this crate's use cases. `event_type()` names
//! match the tags `spec.md` §4.5 enumerates (`PolicyCreated`,
//! `PolicyDeleted`, `PolicyBatchApplied`, `RelationCreated`,
//! `RelationDeleted`, `ModelDraftCreated`, `ModelPublished`,
//! `ModelRolledBack`) so the event outbox's `type` column stays
//! wire-compatible with what downstream consumers expect, even though a
//! single `Created`/`Deleted` struct covers both directions in Rust. The
//! enforcer reload coordinator itself does not subscribe to any of
//! these — mutation handlers call `ReloadCoordinator::reload` directly.

use kernel::{ModelVersionId, RuleId};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelVersionDrafted {
    pub version_id: ModelVersionId,
}

impl kernel::DomainEvent for ModelVersionDrafted {
    fn event_type(&self) -> &'static str {
        "ModelDraftCreated"
    }

    fn aggregate_id(&self) -> Option<String> {
        Some(self.version_id.to_string())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelVersionPublished {
    pub version_id: ModelVersionId,
}

impl kernel::DomainEvent for ModelVersionPublished {
    fn event_type(&self) -> &'static str {
        "ModelPublished"
    }

    fn aggregate_id(&self) -> Option<String> {
        Some(self.version_id.to_string())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelVersionRolledBack {
    pub version_id: ModelVersionId,
}

impl kernel::DomainEvent for ModelVersionRolledBack {
    fn event_type(&self) -> &'static str {
        "ModelRolledBack"
    }

    fn aggregate_id(&self) -> Option<String> {
        Some(self.version_id.to_string())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum RuleChangeKind {
    Created,
    Deleted,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PolicyRuleChanged {
    pub rule_id: RuleId,
    pub kind: RuleChangeKind,
}

impl kernel::DomainEvent for PolicyRuleChanged {
    fn event_type(&self) -> &'static str {
        match self.kind {
            RuleChangeKind::Created => "PolicyCreated",
            RuleChangeKind::Deleted => "PolicyDeleted",
        }
    }

    fn aggregate_id(&self) -> Option<String> {
        Some(self.rule_id.to_string())
    }
}

/// Emitted once per `PolicyBatch` call (`spec.md` §4.5), in addition to the
/// per-row `PolicyRuleChanged` events, so a downstream consumer can tell a
/// batch mutation from a sequence of unrelated single-row ones.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PolicyBatchApplied {
    pub operation: String,
    pub rule_ids: Vec<RuleId>,
}

impl kernel::DomainEvent for PolicyBatchApplied {
    fn event_type(&self) -> &'static str {
        "PolicyBatchApplied"
    }

    fn aggregate_id(&self) -> Option<String> {
        None
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoleRelationChanged {
    pub relation_id: RuleId,
    pub kind: RuleChangeKind,
}

impl kernel::DomainEvent for RoleRelationChanged {
    fn event_type(&self) -> &'static str {
        match self.kind {
            RuleChangeKind::Created => "RelationCreated",
            RuleChangeKind::Deleted => "RelationDeleted",
        }
    }

    fn aggregate_id(&self) -> Option<String> {
        Some(self.relation_id.to_string())
    }
}
