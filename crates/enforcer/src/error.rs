use thiserror::Error;

/// Internal failure modes of a reload. Never crosses the `ReloadCoordinator`
/// port boundary directly — `reload()` catches these, logs them, and reports
/// `false` (`spec.md` §4.6: "catch any error from the underlying enforcer;
/// on error, log and return false").
#[derive(Debug, Error)]
pub enum EnforcerError {
    #[error("failed to load active model/rule rows: {0}")]
    Store(#[from] kernel::ApiError),
    #[error("model text failed to parse: {0}")]
    ModelParse(String),
    #[error("casbin enforcer construction failed: {0}")]
    Build(String),
    #[error("casbin policy load failed: {0}")]
    PolicyLoad(String),
    #[error("no model has ever been installed")]
    NotLoaded,
}
