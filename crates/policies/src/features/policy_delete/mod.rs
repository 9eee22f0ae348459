pub mod dto;
pub mod error;
pub mod use_case;

pub use dto::PolicyDeleteCommand;
pub use error::PolicyDeleteError;
pub use use_case::PolicyDeleteUseCase;
