pub mod password_login;
pub mod sign_out;
pub mod token_refresh;
pub mod user_verify_email;
