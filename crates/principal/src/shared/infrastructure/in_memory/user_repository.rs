//! In-memory `UserRepository`: a process-local reference implementation for
//! the composition root's default wiring and for feature tests, mirroring
//! `policies::shared::infrastructure::in_memory::InMemoryRuleStore`'s shape.

use std::collections::BTreeMap;
use std::sync::Mutex;

use async_trait::async_trait;
use kernel::ApiError;

use crate::domain::User;
use crate::shared::application::UserRepository;

#[derive(Default)]
pub struct InMemoryUserRepository {
    users: Mutex<BTreeMap<i64, User>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seed(&self, user: User) {
        self.users.lock().unwrap().insert(user.uid, user);
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_identifier(&self, identifier: &str) -> Result<Option<User>, ApiError> {
        Ok(self.users.lock().unwrap().values().find(|u| u.matches_identifier(identifier)).cloned())
    }

    async fn get(&self, uid: i64) -> Result<Option<User>, ApiError> {
        Ok(self.users.lock().unwrap().get(&uid).cloned())
    }

    async fn mark_email_verified(&self, uid: i64) -> Result<bool, ApiError> {
        let mut users = self.users.lock().unwrap();
        match users.get_mut(&uid) {
            Some(user) => {
                user.email_verified = true;
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::PasswordHash;

    fn alice() -> User {
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

    #[tokio::test]
    async fn finds_a_seeded_user_by_any_identifier_field() {
        let repo = InMemoryUserRepository::new();
        repo.seed(alice());

        assert!(repo.find_by_identifier("alice@example.com").await.unwrap().is_some());
        assert!(repo.find_by_identifier("missing").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn mark_email_verified_flips_the_flag_and_reports_missing_users() {
        let repo = InMemoryUserRepository::new();
        repo.seed(alice());

        assert!(repo.mark_email_verified(1).await.unwrap());
        assert!(repo.get(1).await.unwrap().unwrap().email_verified);
        assert!(!repo.mark_email_verified(9999).await.unwrap());
    }
}
