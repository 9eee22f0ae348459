use kernel::ApiError;
use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum ModelVersionDiffError {
    #[error(transparent)]
    Store(#[from] ApiError),
}

impl From<ModelVersionDiffError> for ApiError {
    fn from(err: ModelVersionDiffError) -> Self {
        match err {
            ModelVersionDiffError::Store(e) => e,
        }
    }
}
