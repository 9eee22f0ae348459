//! JWT claims shared by access and refresh tokens. The two are always signed
//! with distinct secrets (`spec.md` §4.8) even though the claim shape is
//! identical — see `shared::infrastructure::jwt::TokenCodec`.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub uid: i64,
    pub username: String,
    pub domain: String,
    pub iat: i64,
    pub exp: i64,
}
