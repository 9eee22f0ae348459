pub mod dto;
pub mod error;
pub mod use_case;

pub use dto::{ModelRollbackCommand, ModelRolledBackDto};
pub use error::ModelRollbackError;
pub use use_case::ModelRollbackUseCase;
