//! Library half of the `iam-policy-core` package (mirrors the teacher's
//! `src/lib.rs`, which exists solely so `tests/` can call
//! `build_app_for_tests`). Here the equivalent helper is
//! [`build_state_for_tests`]: it runs the exact composition root
//! `main.rs` uses, against `Config::default()`, so the root-level
//! scenario tests exercise the real wiring instead of a parallel
//! test-only assembly.

pub mod bootstrap;
pub mod config;
pub mod logging;
pub mod role_cache_backend;

pub use bootstrap::{bootstrap, AppState};
pub use config::Config;

/// Boots a fresh in-memory `AppState` for black-box scenario tests.
pub async fn build_state_for_tests() -> anyhow::Result<AppState> {
    bootstrap(&Config::default()).await
}
