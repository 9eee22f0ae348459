//! Token pair and the row it is persisted as (`spec.md` §3 "Token pair", §6
//! "Persisted state layout").

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TokenStatus {
    Unused,
    Used,
}

/// Request-context fields carried alongside an issued token pair, supplied by
/// the caller and persisted verbatim.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct RequestContext {
    pub ip: Option<String>,
    pub address: Option<String>,
    pub user_agent: Option<String>,
    pub request_id: Option<String>,
    pub client_type: Option<String>,
    pub port: Option<u16>,
}

/// A persisted token-pair row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenRecord {
    pub id: i64,
    pub access_token: String,
    pub refresh_token: String,
    pub status: TokenStatus,
    pub user_id: i64,
    pub username: String,
    pub domain: String,
    pub context: RequestContext,
    pub created_at: DateTime<Utc>,
}

/// The pair handed back across the boundary on login/refresh.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
}
