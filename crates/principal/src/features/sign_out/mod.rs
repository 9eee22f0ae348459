pub mod dto;
pub mod error;
pub mod use_case;

pub use dto::SignOutRequest;
pub use error::SignOutError;
pub use use_case::SignOutUseCase;
