pub mod dto;
pub mod error;
pub mod use_case;

pub use dto::{PasswordLoginRequest, PasswordLoginResponse};
pub use error::PasswordLoginError;
pub use use_case::PasswordLoginUseCase;
