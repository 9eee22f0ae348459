//! Opaque access/refresh token issuance and verification via `jsonwebtoken`,
//! grounded on the teacher's own login use case
//! (`crates/iam/src/features/login/logic/use_case.rs`), generalized to a
//! pair of independently-keyed codecs (`spec.md` §4.8: "refresh tokens use a
//! distinct signing secret from access tokens").

use chrono::Utc;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use kernel::ApiError;

use crate::domain::Claims;

pub struct TokenCodec {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl TokenCodec {
    pub fn new(secret: &[u8]) -> Self {
        Self { encoding_key: EncodingKey::from_secret(secret), decoding_key: DecodingKey::from_secret(secret) }
    }

    pub fn issue(&self, uid: i64, username: &str, domain: &str, ttl_seconds: i64) -> Result<String, ApiError> {
        let now = Utc::now().timestamp();
        let claims = Claims {
            uid,
            username: username.to_string(),
            domain: domain.to_string(),
            iat: now,
            exp: now + ttl_seconds,
        };
        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|err| ApiError::internal(format!("token signing failed: {err}")))
    }

    /// Cryptographically verifies the signature and expiry, returning the
    /// embedded claims. Does not consult the token store — single-use
    /// semantics are enforced separately by `TokenStore::try_mark_used`.
    pub fn verify(&self, token: &str) -> Result<Claims, ApiError> {
        decode::<Claims>(token, &self.decoding_key, &Validation::new(Algorithm::HS256))
            .map(|data| data.claims)
            .map_err(|_| ApiError::bad_request("token signature invalid or expired"))
    }
}
