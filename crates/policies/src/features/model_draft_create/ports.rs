use async_trait::async_trait;
use kernel::ModelVersionId;

/// Generates the id for a new draft version. Kept as its own port (rather
/// than letting the store assign ids) so the use case can log the id before
/// the row is ever persisted, matching the `create_policy` id-generator
/// pattern this feature is grounded on.
#[async_trait]
pub trait ModelVersionIdGenerator: Send + Sync {
    async fn generate(&self) -> ModelVersionId;
}
