use crate::domain::{RequestContext, TokenPair};

#[derive(Debug, Clone)]
pub struct PasswordLoginRequest {
    pub identifier: String,
    pub password: String,
    pub context: RequestContext,
}

pub type PasswordLoginResponse = TokenPair;
