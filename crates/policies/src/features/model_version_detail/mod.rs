pub mod dto;
pub mod error;
pub mod use_case;

pub use dto::ModelVersionDetailQuery;
pub use error::ModelVersionDetailError;
pub use use_case::ModelVersionDetailUseCase;
