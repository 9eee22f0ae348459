#[derive(Debug, Clone)]
pub struct SignOutRequest {
    pub refresh_token: String,
}
