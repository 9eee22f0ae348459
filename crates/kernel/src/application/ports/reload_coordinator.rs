//! Enforcer reload coordinator contract (C6, `spec.md` §4.6).
//!
//! Defined in the shared kernel — not in `enforcer` — because every
//! mutating use case in `policies` must call it after a successful store
//! write and before publishing its event, and `policies` cannot depend on
//! `enforcer` (the dependency runs the other way: `enforcer` reads policy
//! rows and model-config text back out of the stores `policies` owns).
//! `enforcer` provides the concrete implementation; the composition root
//! wires it into every mutation use case as `Arc<dyn ReloadCoordinator>`.

use async_trait::async_trait;

/// Reloads the in-memory enforcer from the active model and the current
/// rule set. Never returns an `Err` — a failure is caught, logged by the
/// implementation, and reported as `false` so the caller (a mutation use
/// case) can still publish its event: the store write already committed,
/// and the reload is a retryable cache refresh, not the source of truth.
#[async_trait]
pub trait ReloadCoordinator: Send + Sync {
    async fn reload(&self) -> bool;
}

/// A coordinator that never has anything to reload. Used as the default
/// wiring for feature tests that only care about the store-write path.
pub struct NoopReloadCoordinator;

#[async_trait]
impl ReloadCoordinator for NoopReloadCoordinator {
    async fn reload(&self) -> bool {
        true
    }
}
