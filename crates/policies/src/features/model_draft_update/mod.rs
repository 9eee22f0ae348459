pub mod dto;
pub mod error;
pub mod use_case;

pub use dto::{ModelDraftUpdateCommand, ModelDraftUpdatedDto};
pub use error::ModelDraftUpdateError;
pub use use_case::ModelDraftUpdateUseCase;
