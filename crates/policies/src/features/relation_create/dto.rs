use cqrs::Command;
use kernel::RelationId;

use crate::domain::RoleRelationDto;

#[derive(Debug, Clone)]
pub struct RelationCreateCommand {
    pub relation: RoleRelationDto,
}

impl Command for RelationCreateCommand {
    type Output = RelationCreatedDto;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelationCreatedDto {
    pub id: RelationId,
    pub reloaded: bool,
}
