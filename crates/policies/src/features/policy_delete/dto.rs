use cqrs::Command;
use kernel::RuleId;

#[derive(Debug, Clone, Copy)]
pub struct PolicyDeleteCommand {
    pub id: RuleId,
}

impl Command for PolicyDeleteCommand {
    type Output = ();
}
