pub mod dto;
pub mod error;
pub mod use_case;

pub use dto::{PageRelationsQuery, PageRelationsResultDto};
pub use error::PageRelationsError;
pub use use_case::PageRelationsUseCase;
