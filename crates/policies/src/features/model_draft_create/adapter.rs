use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use kernel::ModelVersionId;

use super::ports::ModelVersionIdGenerator;

#[derive(Default)]
pub struct SequentialModelVersionIdGenerator {
    next: AtomicI64,
}

impl SequentialModelVersionIdGenerator {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ModelVersionIdGenerator for SequentialModelVersionIdGenerator {
    async fn generate(&self) -> ModelVersionId {
        ModelVersionId::new(self.next.fetch_add(1, Ordering::SeqCst) + 1)
    }
}
