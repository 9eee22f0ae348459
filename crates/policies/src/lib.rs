//! Policy rule store, versioned model configuration and the semantic mapper
//! between them (C1, C2, C3, C4, C5 — `spec.md` §3/§4).
//!
//! ## Module structure
//!
//! - `domain` — the positional rule tuple, the typed administrative DTOs,
//!   the mapper translating between them, and the model-config version type.
//! - `shared::application` — `RuleStore`/`ModelConfigStore` ports.
//! - `shared::infrastructure` — in-memory adapters, Casbin model validation,
//!   and the model-version line differ.
//! - `features` — one vertical slice per administrative command/query:
//!   `policy_create`, `policy_delete`, `policy_batch`, `relation_create`,
//!   `relation_delete`, `model_draft_create`, `model_draft_update`,
//!   `model_publish`, `model_rollback`, `page_policies`, `page_relations`,
//!   `page_model_versions`, `model_version_detail`, `model_version_diff`.
//!
//! This crate does not talk to `casbin`'s `Enforcer` directly — that
//! belongs to the `enforcer` crate. It owns the persisted state the
//! enforcer reload coordinator reads from, and publishes the domain events
//! (`ModelVersionPublished`, `PolicyRuleChanged`, ...) that trigger a reload.

pub mod domain;
pub mod events;
pub mod features;
pub mod shared;

pub use domain::{ModelConfigStatus, ModelConfigVersion, NewRuleTuple, PType, PolicyRuleDto, RoleRelationDto, RuleTuple};
pub use shared::application::{ModelConfigStore, RuleFilter, RuleStore};
