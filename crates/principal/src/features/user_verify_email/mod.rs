pub mod dto;
pub mod error;
pub mod use_case;

pub use dto::{UserVerifyEmailCommand, UserVerifyEmailDto};
pub use error::UserVerifyEmailError;
pub use use_case::UserVerifyEmailUseCase;
