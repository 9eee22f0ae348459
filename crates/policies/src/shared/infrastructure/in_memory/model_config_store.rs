//! In-memory `ModelConfigStore` adapter. The active/archived demote-promote
//! swap (`set_active_version`) is the one operation here that must never be
//! observed half-done, so it holds the lock for its entire body.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use kernel::{ApiError, ModelVersionId, PageRequest, PageResult};

use crate::domain::{ModelConfigStatus, ModelConfigVersion};
use crate::shared::application::ModelConfigStore;

#[derive(Default)]
pub struct InMemoryModelConfigStore {
    rows: Mutex<BTreeMap<i64, ModelConfigVersion>>,
    next_id: AtomicI64,
}

impl InMemoryModelConfigStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_id(&self) -> ModelVersionId {
        ModelVersionId::new(self.next_id.fetch_add(1, Ordering::SeqCst) + 1)
    }
}

#[async_trait]
impl ModelConfigStore for InMemoryModelConfigStore {
    async fn get_next_version(&self) -> Result<i64, ApiError> {
        let rows = self.rows.lock().unwrap();
        Ok(rows.values().map(|v| v.version).max().unwrap_or(0) + 1)
    }

    async fn insert_draft(&self, draft: ModelConfigVersion) -> Result<ModelConfigVersion, ApiError> {
        self.rows.lock().unwrap().insert(draft.id.value(), draft.clone());
        Ok(draft)
    }

    async fn get(&self, id: ModelVersionId) -> Result<Option<ModelConfigVersion>, ApiError> {
        Ok(self.rows.lock().unwrap().get(&id.value()).cloned())
    }

    async fn update_draft_content(
        &self,
        id: ModelVersionId,
        content: String,
        remark: String,
    ) -> Result<ModelConfigVersion, ApiError> {
        let mut rows = self.rows.lock().unwrap();
        let row = rows.get_mut(&id.value()).ok_or_else(|| ApiError::not_found("model config version", id.value()))?;
        if row.status != ModelConfigStatus::Draft {
            return Err(ApiError::bad_request(format!("version {id} is not a draft")));
        }
        row.content = content;
        row.remark = remark;
        Ok(row.clone())
    }

    async fn get_active(&self) -> Result<Option<ModelConfigVersion>, ApiError> {
        Ok(self.rows.lock().unwrap().values().find(|v| v.is_active()).cloned())
    }

    async fn set_active_version(&self, id: ModelVersionId) -> Result<ModelConfigVersion, ApiError> {
        let mut rows = self.rows.lock().unwrap();
        if !rows.contains_key(&id.value()) {
            return Err(ApiError::not_found("model config version", id.value()));
        }
        for row in rows.values_mut() {
            if row.id != id && row.is_active() {
                row.status = ModelConfigStatus::Archived;
            }
        }
        let row = rows.get_mut(&id.value()).expect("checked above");
        row.status = ModelConfigStatus::Active;
        Ok(row.clone())
    }

    async fn patch_approval(&self, id: ModelVersionId, approved_by: String) -> Result<ModelConfigVersion, ApiError> {
        let mut rows = self.rows.lock().unwrap();
        let row = rows.get_mut(&id.value()).ok_or_else(|| ApiError::not_found("model config version", id.value()))?;
        row.approved_by = Some(approved_by);
        row.approved_at = Some(chrono::Utc::now());
        Ok(row.clone())
    }

    async fn page(&self, request: PageRequest) -> Result<PageResult<ModelConfigVersion>, ApiError> {
        let rows = self.rows.lock().unwrap();
        let total = rows.len() as u64;
        let offset = request.offset() as usize;
        let items = rows.values().skip(offset).take(request.size as usize).cloned().collect();
        Ok(PageResult::new(items, request, total))
    }
}
