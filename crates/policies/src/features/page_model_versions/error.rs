use kernel::ApiError;
use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum PageModelVersionsError {
    #[error(transparent)]
    Store(#[from] ApiError),
}

impl From<PageModelVersionsError> for ApiError {
    fn from(err: PageModelVersionsError) -> Self {
        match err {
            PageModelVersionsError::Store(e) => e,
        }
    }
}
