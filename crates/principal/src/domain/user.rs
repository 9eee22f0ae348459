//! User touchpoints the policy core needs (`spec.md` §4.8). Full user/role/
//! domain CRUD is explicitly out of scope — this is the minimal read-only
//! shape `execPasswordLogin` authenticates against.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    pub uid: i64,
    pub username: String,
    pub email: String,
    pub phone_number: String,
    pub domain: String,
    pub password_hash: PasswordHash,
    pub enabled: bool,
    pub email_verified: bool,
}

impl User {
    /// `execPasswordLogin` looks the user up "by any of `{username, email,
    /// phoneNumber}`" (`spec.md` §4.8).
    pub fn matches_identifier(&self, identifier: &str) -> bool {
        self.username == identifier || self.email == identifier || self.phone_number == identifier
    }
}

/// An opaque password digest. Choice of hashing algorithm is an external
/// concern (`spec.md` §1 lists "password hashing primitives" as out of
/// scope); this core only needs to compare a candidate against the stored
/// digest the same way every time.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PasswordHash(String);

impl PasswordHash {
    pub fn new(digest: impl Into<String>) -> Self {
        Self(digest.into())
    }

    pub fn of_plaintext(candidate: &str) -> Self {
        use sha2::{Digest, Sha256};
        let mut hasher = Sha256::new();
        hasher.update(candidate.as_bytes());
        Self(format!("{:x}", hasher.finalize()))
    }

    pub fn verify(&self, candidate: &str) -> bool {
        self == &Self::of_plaintext(candidate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user() -> User {
        User {
            uid: 1,
            username: "alice".to_string(),
            email: "alice@example.com".to_string(),
            phone_number: "555-0100".to_string(),
            domain: "default".to_string(),
            password_hash: PasswordHash::of_plaintext("s3cret"),
            enabled: true,
            email_verified: false,
        }
    }

    #[test]
    fn matches_identifier_against_any_of_the_three_fields() {
        let u = user();
        assert!(u.matches_identifier("alice"));
        assert!(u.matches_identifier("alice@example.com"));
        assert!(u.matches_identifier("555-0100"));
        assert!(!u.matches_identifier("bob"));
    }

    #[test]
    fn password_hash_verifies_the_exact_plaintext_only() {
        let hash = PasswordHash::of_plaintext("s3cret");
        assert!(hash.verify("s3cret"));
        assert!(!hash.verify("wrong"));
    }
}
