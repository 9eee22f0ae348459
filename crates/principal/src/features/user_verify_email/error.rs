use kernel::ApiError;
use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum UserVerifyEmailError {
    #[error("user {0} not found")]
    NotFound(i64),
    #[error(transparent)]
    Store(#[from] ApiError),
}

impl From<UserVerifyEmailError> for ApiError {
    fn from(err: UserVerifyEmailError) -> Self {
        match err {
            UserVerifyEmailError::NotFound(id) => ApiError::not_found("user", id),
            UserVerifyEmailError::Store(e) => e,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kernel::ErrorKind;

    #[test]
    fn not_found_maps_to_not_found_and_names_the_id() {
        let api_err: ApiError = UserVerifyEmailError::NotFound(42).into();
        assert_eq!(api_err.kind, ErrorKind::NotFound);
        assert!(api_err.message.contains('4'));
    }
}
