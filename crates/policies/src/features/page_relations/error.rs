use kernel::ApiError;
use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum PageRelationsError {
    #[error(transparent)]
    Store(#[from] ApiError),
}

impl From<PageRelationsError> for ApiError {
    fn from(err: PageRelationsError) -> Self {
        match err {
            PageRelationsError::Store(e) => e,
        }
    }
}
