use cqrs::Query;
use kernel::ModelVersionId;

use crate::domain::ModelConfigVersion;

#[derive(Debug, Clone, Copy)]
pub struct ModelVersionDetailQuery {
    pub id: ModelVersionId,
}

impl Query for ModelVersionDetailQuery {
    type Output = ModelConfigVersion;
}
