pub mod dto;
pub mod error;
pub mod use_case;

pub use dto::{ModelPublishCommand, ModelPublishedDto};
pub use error::ModelPublishError;
pub use use_case::ModelPublishUseCase;
