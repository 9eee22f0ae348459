use cqrs::Command;
use kernel::ModelVersionId;

#[derive(Debug, Clone)]
pub struct ModelDraftCreateCommand {
    pub content: String,
    /// Defaults to empty string when omitted at the boundary, never `null`
    /// (`original_source/` behavior, see `SPEC_FULL.md` §4).
    pub remark: String,
    pub created_by: String,
}

impl Command for ModelDraftCreateCommand {
    type Output = ModelDraftCreatedDto;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelDraftCreatedDto {
    pub id: ModelVersionId,
    pub version: i64,
}
