use cqrs::Command;
use kernel::ModelVersionId;

#[derive(Debug, Clone)]
pub struct ModelDraftUpdateCommand {
    pub id: ModelVersionId,
    pub content: String,
    pub remark: String,
}

impl Command for ModelDraftUpdateCommand {
    type Output = ModelDraftUpdatedDto;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelDraftUpdatedDto {
    pub id: ModelVersionId,
}
