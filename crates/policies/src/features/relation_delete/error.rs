use kernel::ApiError;
use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum RelationDeleteError {
    #[error(transparent)]
    Store(#[from] ApiError),
}

impl From<RelationDeleteError> for ApiError {
    fn from(err: RelationDeleteError) -> Self {
        match err {
            RelationDeleteError::Store(e) => e,
        }
    }
}
