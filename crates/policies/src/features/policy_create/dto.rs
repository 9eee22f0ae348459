use cqrs::Command;
use kernel::RuleId;

use crate::domain::PolicyRuleDto;

#[derive(Debug, Clone)]
pub struct PolicyCreateCommand {
    pub rule: PolicyRuleDto,
}

impl Command for PolicyCreateCommand {
    type Output = PolicyCreatedDto;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PolicyCreatedDto {
    pub id: RuleId,
    pub reloaded: bool,
}
