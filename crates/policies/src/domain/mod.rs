pub mod dto;
pub mod mapper;
pub mod model_config;
pub mod rule;

pub use dto::{PolicyRuleDto, RoleRelationDto};
pub use mapper::{to_dto, to_positional};
pub use model_config::{ModelConfigVersion, ModelConfigStatus};
pub use rule::{NewRuleTuple, PType, RuleTuple};
