//! `UserVerifyEmail` (`spec.md` §6). Email verification's cryptographic
//! token flow is external (`spec.md` §1); this handler only flips the
//! user's verified marker once that flow has already succeeded.

use std::sync::Arc;

use async_trait::async_trait;
use cqrs::CommandHandler;
use kernel::{ApiError, EventPublisher};
use tracing::{info, instrument};

use crate::events::UserEmailVerified;
use crate::shared::application::UserRepository;

use super::dto::{UserVerifyEmailCommand, UserVerifyEmailDto};
use super::error::UserVerifyEmailError;

pub struct UserVerifyEmailUseCase<U, B> {
    users: Arc<U>,
    events: Arc<B>,
}

impl<U, B> UserVerifyEmailUseCase<U, B>
where
    U: UserRepository,
    B: EventPublisher,
{
    pub fn new(users: Arc<U>, events: Arc<B>) -> Self {
        Self { users, events }
    }

    #[instrument(name = "user_verify_email", skip(self, command))]
    pub async fn handle(&self, command: UserVerifyEmailCommand) -> Result<UserVerifyEmailDto, UserVerifyEmailError> {
        let verified = self.users.mark_email_verified(command.user_id).await?;
        if !verified {
            return Err(UserVerifyEmailError::NotFound(command.user_id));
        }

        let _ = self.events.publish(UserEmailVerified { uid: command.user_id }).await;

        info!(user_id = command.user_id, acting_uid = command.uid, "user email verified");
        Ok(UserVerifyEmailDto { user_id: command.user_id, verified: true })
    }
}

#[async_trait]
impl<U, B> CommandHandler<UserVerifyEmailCommand> for UserVerifyEmailUseCase<U, B>
where
    U: UserRepository,
    B: EventPublisher,
{
    async fn execute(&self, command: UserVerifyEmailCommand) -> Result<UserVerifyEmailDto, ApiError> {
        self.handle(command).await.map_err(Into::into)
    }
}
