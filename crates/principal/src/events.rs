//! Domain events published by the principal/token service (`spec.md` §4.8,
//! §4.10). Mirrors `policies::events`'s shape: one small `Clone + Serialize`
//! struct per event, `aggregate_id` set to the id ordering applies to (here,
//! the user id or token row id).

use kernel::DomainEvent;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserLoggedIn {
    pub uid: i64,
    pub username: String,
    pub domain: String,
}

impl DomainEvent for UserLoggedIn {
    fn event_type(&self) -> &'static str {
        "UserLoggedIn"
    }

    fn aggregate_id(&self) -> Option<String> {
        Some(self.uid.to_string())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenGenerated {
    pub token_id: i64,
    pub uid: i64,
}

impl DomainEvent for TokenGenerated {
    fn event_type(&self) -> &'static str {
        "TokenGenerated"
    }

    fn aggregate_id(&self) -> Option<String> {
        Some(self.token_id.to_string())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshTokenUsed {
    pub token_id: i64,
    pub uid: i64,
}

impl DomainEvent for RefreshTokenUsed {
    fn event_type(&self) -> &'static str {
        "RefreshTokenUsed"
    }

    fn aggregate_id(&self) -> Option<String> {
        Some(self.token_id.to_string())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserSignedOut {
    pub uid: i64,
}

impl DomainEvent for UserSignedOut {
    fn event_type(&self) -> &'static str {
        "UserSignedOut"
    }

    fn aggregate_id(&self) -> Option<String> {
        Some(self.uid.to_string())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserEmailVerified {
    pub uid: i64,
}

impl DomainEvent for UserEmailVerified {
    fn event_type(&self) -> &'static str {
        "UserEmailVerified"
    }

    fn aggregate_id(&self) -> Option<String> {
        Some(self.uid.to_string())
    }
}
