//! Enforcer Reload Coordinator (C6, `spec.md` §4.6).
//!
//! This crate owns the single in-process handle to the embedded Casbin
//! engine. It never originates a mutation — `policies`' use cases write to
//! the rule store and model-config store, then call [`CasbinReloadCoordinator::reload`]
//! (via the `kernel::ReloadCoordinator` port) to bring the enforcer back in
//! sync. `enforcer` depends on `policies` to read the active model text and
//! rule rows back out; `policies` never depends on `enforcer` — see
//! `SPEC_FULL.md` §2's workspace layout table.

mod coordinator;
mod error;

pub use coordinator::CasbinReloadCoordinator;
pub use error::EnforcerError;
