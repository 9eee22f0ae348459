pub mod dto;
pub mod error;
pub mod use_case;

pub use dto::{PolicyBatchCommand, PolicyBatchResultDto};
pub use error::PolicyBatchError;
pub use use_case::PolicyBatchUseCase;
