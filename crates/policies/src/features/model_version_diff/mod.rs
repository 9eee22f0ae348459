pub mod dto;
pub mod error;
pub mod use_case;

pub use dto::{ModelVersionDiffDto, ModelVersionDiffQuery};
pub use error::ModelVersionDiffError;
pub use use_case::ModelVersionDiffUseCase;
