use cqrs::Command;
use kernel::ModelVersionId;

#[derive(Debug, Clone)]
pub struct ModelRollbackCommand {
    pub id: ModelVersionId,
    pub operator: String,
}

impl Command for ModelRollbackCommand {
    type Output = ModelRolledBackDto;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModelRolledBackDto {
    pub id: ModelVersionId,
    pub reloaded: bool,
}
