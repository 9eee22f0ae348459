use kernel::ApiError;
use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum PasswordLoginError {
    #[error("user not found")]
    UserNotFound,
    #[error("password does not match")]
    WrongPassword,
    #[error("user account is disabled")]
    AccountDisabled,
    #[error(transparent)]
    Store(#[from] ApiError),
}

impl From<PasswordLoginError> for ApiError {
    fn from(err: PasswordLoginError) -> Self {
        match err {
            PasswordLoginError::UserNotFound => ApiError::not_found("user", "<identifier>"),
            PasswordLoginError::WrongPassword => ApiError::bad_request(err.to_string()),
            PasswordLoginError::AccountDisabled => ApiError::bad_request(err.to_string()),
            PasswordLoginError::Store(e) => e,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kernel::ErrorKind;

    #[test]
    fn user_not_found_maps_to_not_found() {
        let api_err: ApiError = PasswordLoginError::UserNotFound.into();
        assert_eq!(api_err.kind, ErrorKind::NotFound);
    }

    #[test]
    fn wrong_password_maps_to_bad_request() {
        let api_err: ApiError = PasswordLoginError::WrongPassword.into();
        assert_eq!(api_err.kind, ErrorKind::BadRequest);
    }

    #[test]
    fn disabled_account_maps_to_bad_request() {
        let api_err: ApiError = PasswordLoginError::AccountDisabled.into();
        assert_eq!(api_err.kind, ErrorKind::BadRequest);
    }
}
