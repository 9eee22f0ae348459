pub mod dto;
pub mod error;
pub mod use_case;

pub use dto::{PageModelVersionsQuery, PageModelVersionsResultDto};
pub use error::PageModelVersionsError;
pub use use_case::PageModelVersionsUseCase;
