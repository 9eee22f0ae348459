use kernel::ApiError;
use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum ModelVersionDetailError {
    #[error(transparent)]
    Store(#[from] ApiError),
}

impl From<ModelVersionDetailError> for ApiError {
    fn from(err: ModelVersionDetailError) -> Self {
        match err {
            ModelVersionDetailError::Store(e) => e,
        }
    }
}
