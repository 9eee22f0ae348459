use cqrs::Command;

#[derive(Debug, Clone)]
pub struct UserVerifyEmailCommand {
    pub user_id: i64,
    pub uid: i64,
}

impl Command for UserVerifyEmailCommand {
    type Output = UserVerifyEmailDto;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserVerifyEmailDto {
    pub user_id: i64,
    pub verified: bool,
}
