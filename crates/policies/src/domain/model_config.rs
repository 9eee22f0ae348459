//! Versioned model configuration (C2, `spec.md` §3): the Casbin `model.conf`
//! text that `[request_definition]`/`[policy_definition]`/`[matchers]`
//! sections describe, tracked through a draft → active → archived lifecycle.

use kernel::ModelVersionId;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ModelConfigStatus {
    Draft,
    Active,
    Archived,
}

impl ModelConfigStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ModelConfigStatus::Draft => "draft",
            ModelConfigStatus::Active => "active",
            ModelConfigStatus::Archived => "archived",
        }
    }
}

impl std::fmt::Display for ModelConfigStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A versioned `model.conf` document (`spec.md` §3). `id` is the row's
/// stable identity; `version` is the separate monotonic counter callers see
/// (`getNextVersion` / scenario S1's `version=1`) — kept distinct because a
/// store backed by a real database assigns `id` on insert while `version`
/// must be computable before the row exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelConfigVersion {
    pub id: ModelVersionId,
    pub version: i64,
    pub content: String,
    pub status: ModelConfigStatus,
    /// Free-text annotation, defaults to empty rather than null (`original_source/` behavior).
    pub remark: String,
    pub created_by: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub approved_by: Option<String>,
    pub approved_at: Option<chrono::DateTime<chrono::Utc>>,
}

impl ModelConfigVersion {
    pub fn new_draft(
        id: ModelVersionId,
        version: i64,
        content: impl Into<String>,
        remark: impl Into<String>,
        created_by: impl Into<String>,
    ) -> Self {
        Self {
            id,
            version,
            content: content.into(),
            status: ModelConfigStatus::Draft,
            remark: remark.into(),
            created_by: created_by.into(),
            created_at: chrono::Utc::now(),
            approved_by: None,
            approved_at: None,
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self.status, ModelConfigStatus::Active)
    }
}
