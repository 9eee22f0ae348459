use kernel::ApiError;
use thiserror::Error;

use crate::shared::infrastructure::validator::ModelValidationError;

#[derive(Debug, Error)]
pub enum ModelDraftUpdateError {
    #[error("model validation failed: {0}")]
    Invalid(#[from] ModelValidationError),
    #[error(transparent)]
    Store(#[from] ApiError),
}

impl From<ModelDraftUpdateError> for ApiError {
    fn from(err: ModelDraftUpdateError) -> Self {
        match err {
            ModelDraftUpdateError::Invalid(e) => ApiError::bad_request(e.to_string()),
            ModelDraftUpdateError::Store(e) => e,
        }
    }
}
