use kernel::{ApiError, ErrorKind};
use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum PolicyCreateError {
    #[error("rule must have ptype \"p\" to be created as a policy")]
    WrongPType,
    #[error(transparent)]
    Store(#[from] ApiError),
}

impl From<PolicyCreateError> for ApiError {
    fn from(err: PolicyCreateError) -> Self {
        match err {
            PolicyCreateError::WrongPType => ApiError::bad_request(err.to_string()),
            PolicyCreateError::Store(e) => e,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrong_ptype_maps_to_bad_request() {
        let api_err: ApiError = PolicyCreateError::WrongPType.into();
        assert_eq!(api_err.kind, ErrorKind::BadRequest);
    }
}
