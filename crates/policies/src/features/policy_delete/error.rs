use kernel::ApiError;
use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum PolicyDeleteError {
    #[error(transparent)]
    Store(#[from] ApiError),
}

impl From<PolicyDeleteError> for ApiError {
    fn from(err: PolicyDeleteError) -> Self {
        match err {
            PolicyDeleteError::Store(e) => e,
        }
    }
}
