use kernel::ApiError;
use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum RelationCreateError {
    #[error(transparent)]
    Store(#[from] ApiError),
}

impl From<RelationCreateError> for ApiError {
    fn from(err: RelationCreateError) -> Self {
        match err {
            RelationCreateError::Store(e) => e,
        }
    }
}
