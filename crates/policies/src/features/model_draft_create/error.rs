use kernel::ApiError;
use thiserror::Error;

use crate::shared::infrastructure::validator::ModelValidationError;

#[derive(Debug, Error)]
pub enum ModelDraftCreateError {
    #[error("model validation failed: {0}")]
    Invalid(#[from] ModelValidationError),
    #[error(transparent)]
    Store(#[from] ApiError),
}

impl From<ModelDraftCreateError> for ApiError {
    fn from(err: ModelDraftCreateError) -> Self {
        match err {
            ModelDraftCreateError::Invalid(e) => ApiError::bad_request(e.to_string()),
            ModelDraftCreateError::Store(e) => e,
        }
    }
}
