use cqrs::Command;
use kernel::RelationId;

#[derive(Debug, Clone, Copy)]
pub struct RelationDeleteCommand {
    pub id: RelationId,
}

impl Command for RelationDeleteCommand {
    type Output = ();
}
