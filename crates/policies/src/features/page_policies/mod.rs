pub mod dto;
pub mod error;
pub mod use_case;

pub use dto::{PagePoliciesQuery, PagePoliciesResultDto};
pub use error::PagePoliciesError;
pub use use_case::PagePoliciesUseCase;
