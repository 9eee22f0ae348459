use kernel::ApiError;
use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum SignOutError {
    #[error(transparent)]
    Store(#[from] ApiError),
}

impl From<SignOutError> for ApiError {
    fn from(err: SignOutError) -> Self {
        match err {
            SignOutError::Store(e) => e,
        }
    }
}
