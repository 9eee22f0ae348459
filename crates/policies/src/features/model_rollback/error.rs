use kernel::ApiError;
use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum ModelRollbackError {
    #[error(transparent)]
    Store(#[from] ApiError),
}

impl From<ModelRollbackError> for ApiError {
    fn from(err: ModelRollbackError) -> Self {
        match err {
            ModelRollbackError::Store(e) => e,
        }
    }
}
