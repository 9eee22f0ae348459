use kernel::ApiError;
use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum PagePoliciesError {
    #[error(transparent)]
    Store(#[from] ApiError),
}

impl From<PagePoliciesError> for ApiError {
    fn from(err: PagePoliciesError) -> Self {
        match err {
            PagePoliciesError::Store(e) => e,
        }
    }
}
