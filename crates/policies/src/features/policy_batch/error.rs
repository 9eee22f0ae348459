use kernel::ApiError;
use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum PolicyBatchError {
    #[error("operation \"{0}\" is not one of \"add\", \"delete\"")]
    InvalidOperation(String),
    #[error("PolicyBatch requires at least one item")]
    EmptyBatch,
    #[error("batch item {0} has ptype \"g\" but PolicyBatch only accepts \"p\" rows")]
    WrongPType(usize),
    #[error("batch item {0} has no id, required to delete")]
    MissingId(usize),
    #[error(transparent)]
    Store(#[from] ApiError),
}

impl From<PolicyBatchError> for ApiError {
    fn from(err: PolicyBatchError) -> Self {
        match err {
            PolicyBatchError::InvalidOperation(_)
            | PolicyBatchError::EmptyBatch
            | PolicyBatchError::WrongPType(_)
            | PolicyBatchError::MissingId(_) => ApiError::bad_request(err.to_string()),
            PolicyBatchError::Store(e) => e,
        }
    }
}
