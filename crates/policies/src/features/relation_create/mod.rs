pub mod dto;
pub mod error;
pub mod use_case;

pub use dto::{RelationCreateCommand, RelationCreatedDto};
pub use error::RelationCreateError;
pub use use_case::RelationCreateUseCase;
