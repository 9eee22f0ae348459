//! The error taxonomy surfaced at every crate boundary.
//!
//! `spec.md` §7 defines five kinds. Every feature-specific error type in the
//! other crates (`CreatePolicyError`, `ManageModelVersionError`, ...)
//! ultimately maps into one of these via `From` impls, so the CQRS bus can
//! return a single uniform `{kind, message}` envelope to callers regardless
//! of which handler produced the failure.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The five error kinds the administrative surface can report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorKind {
    /// Caller-supplied input violates a documented precondition.
    BadRequest,
    /// Target row does not exist.
    NotFound,
    /// Refresh-token already used, or a compare-and-set race was lost.
    Conflict,
    /// Permission check denied. Never raised by this core; reserved for the
    /// surrounding guard.
    Forbidden,
    /// Enforcer reload failure, store driver failure, or anything unexpected.
    Internal,
}

/// `{kind, message}` — the error envelope named in `spec.md` §6.
#[derive(Debug, Clone, Error, Serialize, Deserialize)]
#[error("{kind:?}: {message}")]
pub struct ApiError {
    pub kind: ErrorKind,
    pub message: String,
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self { kind: ErrorKind::BadRequest, message: message.into() }
    }

    pub fn not_found(entity: &str, id: impl std::fmt::Display) -> Self {
        Self { kind: ErrorKind::NotFound, message: format!("{entity} {id} not found") }
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self { kind: ErrorKind::Conflict, message: message.into() }
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        Self { kind: ErrorKind::Forbidden, message: message.into() }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        // Internal messages stay generic per spec.md §7; callers should log
        // the detailed cause via `tracing` before constructing this.
        let _ = message;
        Self { kind: ErrorKind::Internal, message: "an internal error occurred".to_string() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_names_entity_and_id() {
        let err = ApiError::not_found("policy rule", 42);
        assert_eq!(err.kind, ErrorKind::NotFound);
        assert!(err.message.contains("policy rule"));
        assert!(err.message.contains("42"));
    }

    #[test]
    fn internal_messages_are_generic() {
        let err = ApiError::internal("leaked db connection string: postgres://...");
        assert_eq!(err.message, "an internal error occurred");
    }
}
