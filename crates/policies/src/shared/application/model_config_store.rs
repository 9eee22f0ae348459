//! Port for the model-config store (C2, `spec.md` §4.2): versioned
//! `model.conf` documents moving through the draft → active → archived
//! lifecycle. At most one version is ever `Active`.

use async_trait::async_trait;
use kernel::{ApiError, ModelVersionId, PageRequest, PageResult};

use crate::domain::ModelConfigVersion;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ModelConfigStore: Send + Sync {
    /// `1` if the table is empty, otherwise `max(version) + 1` (`spec.md`
    /// §4.2). Strictly monotonic: callers never observe the same value twice.
    async fn get_next_version(&self) -> Result<i64, ApiError>;

    async fn insert_draft(&self, draft: ModelConfigVersion) -> Result<ModelConfigVersion, ApiError>;

    async fn get(&self, id: ModelVersionId) -> Result<Option<ModelConfigVersion>, ApiError>;

    async fn update_draft_content(
        &self,
        id: ModelVersionId,
        content: String,
        remark: String,
    ) -> Result<ModelConfigVersion, ApiError>;

    async fn get_active(&self) -> Result<Option<ModelConfigVersion>, ApiError>;

    /// Atomically demotes the current active version (if any) to `Archived`
    /// and promotes `id` to `Active`. Implementations must make this
    /// all-or-nothing: never leave two active rows, never leave zero when one
    /// previously existed, per `spec.md` §8 invariant "at most one active
    /// row".
    async fn set_active_version(&self, id: ModelVersionId) -> Result<ModelConfigVersion, ApiError>;

    /// Patches `approved_by`/`approved_at = now` on a row, used by
    /// `publishVersion`/`rollbackVersion` right after `set_active_version`.
    async fn patch_approval(&self, id: ModelVersionId, approved_by: String) -> Result<ModelConfigVersion, ApiError>;

    async fn page(&self, request: PageRequest) -> Result<PageResult<ModelConfigVersion>, ApiError>;
}
