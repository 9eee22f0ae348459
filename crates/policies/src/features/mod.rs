pub mod model_draft_create;
pub mod model_draft_update;
pub mod model_publish;
pub mod model_rollback;
pub mod model_version_detail;
pub mod model_version_diff;
pub mod page_model_versions;
pub mod page_policies;
pub mod page_relations;
pub mod policy_batch;
pub mod policy_create;
pub mod policy_delete;
pub mod relation_create;
pub mod relation_delete;
