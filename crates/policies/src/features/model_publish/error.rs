use kernel::ApiError;
use thiserror::Error;

use crate::shared::infrastructure::validator::ModelValidationError;

#[derive(Debug, Error)]
pub enum ModelPublishError {
    #[error("model failed re-validation at publish time: {0}")]
    Invalid(#[from] ModelValidationError),
    #[error(transparent)]
    Store(#[from] ApiError),
}

impl From<ModelPublishError> for ApiError {
    fn from(err: ModelPublishError) -> Self {
        match err {
            ModelPublishError::Invalid(e) => ApiError::bad_request(e.to_string()),
            ModelPublishError::Store(e) => e,
        }
    }
}
