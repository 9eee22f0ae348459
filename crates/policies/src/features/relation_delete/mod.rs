pub mod dto;
pub mod error;
pub mod use_case;

pub use dto::RelationDeleteCommand;
pub use error::RelationDeleteError;
pub use use_case::RelationDeleteUseCase;
