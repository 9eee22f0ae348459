//! The `Principal` produced from a validated access token (`spec.md` §3).
//!
//! Not persisted by this core; it is the shape the token service hands back
//! to callers after `execPasswordLogin`/`refreshToken`, and the shape the
//! role cache is keyed on.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Principal {
    pub uid: String,
    pub username: String,
    pub domain: String,
}

impl Principal {
    pub fn new(uid: impl Into<String>, username: impl Into<String>, domain: impl Into<String>) -> Self {
        Self { uid: uid.into(), username: username.into(), domain: domain.into() }
    }
}
