pub mod dto;
pub mod error;
pub mod use_case;

pub use dto::{PolicyCreateCommand, PolicyCreatedDto};
pub use error::PolicyCreateError;
pub use use_case::PolicyCreateUseCase;
