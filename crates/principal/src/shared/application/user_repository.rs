//! Port for the user lookup `execPasswordLogin` needs (`spec.md` §4.8). Full
//! user CRUD is out of scope (`spec.md` §1) — this is a read-mostly view onto
//! an externally owned user aggregate.

use async_trait::async_trait;
use kernel::ApiError;

use crate::domain::User;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Looks a user up "by any of `{username, email, phoneNumber}`"
    /// (`spec.md` §4.8).
    async fn find_by_identifier(&self, identifier: &str) -> Result<Option<User>, ApiError>;

    async fn get(&self, uid: i64) -> Result<Option<User>, ApiError>;

    /// `UserVerifyEmail` (`spec.md` §6): flips the user's email-verified
    /// marker. Returns `false` if the user does not exist.
    async fn mark_email_verified(&self, uid: i64) -> Result<bool, ApiError>;
}
