use kernel::ApiError;
use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum TokenRefreshError {
    #[error("refresh token not found")]
    NotFound,
    #[error("refresh token signature invalid or expired")]
    InvalidSignature,
    #[error("refresh token already used")]
    AlreadyUsed,
    #[error(transparent)]
    Store(#[from] ApiError),
}

impl From<TokenRefreshError> for ApiError {
    fn from(err: TokenRefreshError) -> Self {
        match err {
            TokenRefreshError::NotFound => ApiError::not_found("refresh token", "<redacted>"),
            TokenRefreshError::InvalidSignature => ApiError::bad_request(err.to_string()),
            // spec.md §4.8's own prose calls this a BadRequest, but §7's error
            // taxonomy and the S4 testable property both name it a Conflict
            // ("concurrent-update race lost on compare-and-set") — Conflict
            // wins here; see DESIGN.md.
            TokenRefreshError::AlreadyUsed => ApiError::conflict(err.to_string()),
            TokenRefreshError::Store(e) => e,
        }
    }
}
