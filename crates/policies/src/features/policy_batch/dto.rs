use cqrs::Command;
use kernel::RuleId;

use crate::domain::PolicyRuleDto;

/// `spec.md` §6: `PolicyBatch{policies: PolicyRuleDto[], operation: "add"|"delete", uid}`.
/// `operation` stays a raw string on the command, the same as `ModelDraftCreateCommand`
/// keeps raw `content` — the use case is where `"add"|"delete"` gets validated
/// (`spec.md` §8: "`PolicyBatch` with `operation` ∉ {"add","delete"} fails `BadRequest`").
#[derive(Debug, Clone, Default)]
pub struct PolicyBatchCommand {
    pub policies: Vec<PolicyRuleDto>,
    pub operation: String,
}

impl Command for PolicyBatchCommand {
    type Output = PolicyBatchResultDto;
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PolicyBatchResultDto {
    pub added: Vec<RuleId>,
    pub removed_count: usize,
    pub reloaded: bool,
}
