use crate::domain::{RequestContext, TokenPair};

#[derive(Debug, Clone)]
pub struct TokenRefreshRequest {
    pub refresh_token: String,
    pub context: RequestContext,
}

pub type TokenRefreshResponse = TokenPair;
