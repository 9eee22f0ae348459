pub mod adapter;
pub mod dto;
pub mod error;
pub mod ports;
pub mod use_case;

pub use adapter::SequentialModelVersionIdGenerator;
pub use dto::{ModelDraftCreateCommand, ModelDraftCreatedDto};
pub use error::ModelDraftCreateError;
pub use ports::ModelVersionIdGenerator;
pub use use_case::ModelDraftCreateUseCase;
