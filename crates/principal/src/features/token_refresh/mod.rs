pub mod dto;
pub mod error;
pub mod use_case;

pub use dto::{TokenRefreshRequest, TokenRefreshResponse};
pub use error::TokenRefreshError;
pub use use_case::TokenRefreshUseCase;
