//! Configuration for the `iam-policy-core` composition root.
//!
//! Mirrors the teacher's `src/config.rs`: one `Config` aggregate of
//! section structs, each with a `Default` impl and loaded from
//! `IAM_<SECTION>_<KEY>` environment variables, plus a `validate()` step run
//! once at startup. `ServerConfig`/`DatabaseConfig`/`SchemaConfig` become
//! `RuntimeConfig`/`TokenConfig`/`RoleCacheConfig` here (`SPEC_FULL.md` §3);
//! `LoggingConfig` is carried over unchanged.

use serde::{Deserialize, Serialize};
use std::env;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub runtime: RuntimeConfig,
    pub token: TokenConfig,
    pub role_cache: RoleCacheConfig,
    pub logging: LoggingConfig,
}

/// Process-wide knobs that aren't specific to tokens or the role cache.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuntimeConfig {
    /// `"in-memory"` or `"redis"` — selects the `RoleCache` adapter.
    pub role_cache_backend: String,

    /// Required when `role_cache_backend = "redis"`.
    pub redis_url: Option<String>,

    /// Capacity of each `kernel::InMemoryEventBus` broadcast channel.
    pub event_channel_capacity: usize,
}

/// `spec.md` §6's "Environment-level configuration": JWT secrets and TTLs
/// for the access/refresh token pair issued by `principal`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenConfig {
    pub jwt_access_secret: String,
    pub jwt_access_ttl_seconds: i64,
    pub jwt_refresh_secret: String,
    pub jwt_refresh_ttl_seconds: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoleCacheConfig {
    /// Default `auth:token:` (`spec.md` §6).
    pub key_prefix: String,
    pub ttl_seconds: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
    pub include_timestamps: bool,
    pub include_location: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            runtime: RuntimeConfig::default(),
            token: TokenConfig::default(),
            role_cache: RoleCacheConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self { role_cache_backend: "in-memory".to_string(), redis_url: None, event_channel_capacity: 1024 }
    }
}

impl Default for TokenConfig {
    fn default() -> Self {
        Self {
            jwt_access_secret: "dev-access-secret-change-me".to_string(),
            jwt_access_ttl_seconds: 900,
            jwt_refresh_secret: "dev-refresh-secret-change-me".to_string(),
            jwt_refresh_ttl_seconds: 1_209_600,
        }
    }
}

impl Default for RoleCacheConfig {
    fn default() -> Self {
        Self { key_prefix: "auth:token:".to_string(), ttl_seconds: 1800 }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: "info".to_string(), format: "pretty".to_string(), include_timestamps: true, include_location: false }
    }
}

impl Config {
    /// Load configuration from environment variables, falling back to
    /// defaults for anything unset.
    ///
    /// - `IAM_RUNTIME_ROLE_CACHE_BACKEND`, `IAM_RUNTIME_REDIS_URL`,
    ///   `IAM_RUNTIME_EVENT_CHANNEL_CAPACITY`
    /// - `IAM_TOKEN_JWT_ACCESS_SECRET`, `IAM_TOKEN_JWT_ACCESS_TTL_SECONDS`,
    ///   `IAM_TOKEN_JWT_REFRESH_SECRET`, `IAM_TOKEN_JWT_REFRESH_TTL_SECONDS`
    /// - `IAM_ROLE_CACHE_KEY_PREFIX`, `IAM_ROLE_CACHE_TTL_SECONDS`
    /// - `IAM_LOGGING_LEVEL`, `IAM_LOGGING_FORMAT`,
    ///   `IAM_LOGGING_INCLUDE_TIMESTAMPS`, `IAM_LOGGING_INCLUDE_LOCATION`
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(backend) = env::var("IAM_RUNTIME_ROLE_CACHE_BACKEND") {
            config.runtime.role_cache_backend = backend;
        }
        if let Ok(url) = env::var("IAM_RUNTIME_REDIS_URL") {
            config.runtime.redis_url = Some(url);
        }
        if let Ok(capacity) = env::var("IAM_RUNTIME_EVENT_CHANNEL_CAPACITY") {
            if let Ok(capacity) = capacity.parse() {
                config.runtime.event_channel_capacity = capacity;
            }
        }

        if let Ok(secret) = env::var("IAM_TOKEN_JWT_ACCESS_SECRET") {
            config.token.jwt_access_secret = secret;
        }
        if let Ok(ttl) = env::var("IAM_TOKEN_JWT_ACCESS_TTL_SECONDS") {
            if let Ok(ttl) = ttl.parse() {
                config.token.jwt_access_ttl_seconds = ttl;
            }
        }
        if let Ok(secret) = env::var("IAM_TOKEN_JWT_REFRESH_SECRET") {
            config.token.jwt_refresh_secret = secret;
        }
        if let Ok(ttl) = env::var("IAM_TOKEN_JWT_REFRESH_TTL_SECONDS") {
            if let Ok(ttl) = ttl.parse() {
                config.token.jwt_refresh_ttl_seconds = ttl;
            }
        }

        if let Ok(prefix) = env::var("IAM_ROLE_CACHE_KEY_PREFIX") {
            config.role_cache.key_prefix = prefix;
        }
        if let Ok(ttl) = env::var("IAM_ROLE_CACHE_TTL_SECONDS") {
            if let Ok(ttl) = ttl.parse() {
                config.role_cache.ttl_seconds = ttl;
            }
        }

        if let Ok(level) = env::var("IAM_LOGGING_LEVEL") {
            config.logging.level = level;
        }
        if let Ok(format) = env::var("IAM_LOGGING_FORMAT") {
            config.logging.format = format;
        }
        if let Ok(timestamps) = env::var("IAM_LOGGING_INCLUDE_TIMESTAMPS") {
            config.logging.include_timestamps = timestamps.to_lowercase() == "true" || timestamps == "1";
        }
        if let Ok(location) = env::var("IAM_LOGGING_INCLUDE_LOCATION") {
            config.logging.include_location = location.to_lowercase() == "true" || location == "1";
        }

        config
    }

    pub fn validate(&self) -> Result<(), String> {
        let valid_backends = ["in-memory", "redis"];
        if !valid_backends.contains(&self.runtime.role_cache_backend.as_str()) {
            return Err(format!(
                "Invalid role cache backend '{}'. Valid values: {}",
                self.runtime.role_cache_backend,
                valid_backends.join(", ")
            ));
        }
        if self.runtime.role_cache_backend == "redis" && self.runtime.redis_url.is_none() {
            return Err("IAM_RUNTIME_REDIS_URL is required when role_cache_backend = \"redis\"".to_string());
        }
        if self.runtime.event_channel_capacity == 0 {
            return Err("Event channel capacity cannot be 0".to_string());
        }

        if self.token.jwt_access_secret.is_empty() {
            return Err("JWT access secret cannot be empty".to_string());
        }
        if self.token.jwt_refresh_secret.is_empty() {
            return Err("JWT refresh secret cannot be empty".to_string());
        }
        if self.token.jwt_access_ttl_seconds <= 0 {
            return Err("JWT access TTL must be positive".to_string());
        }
        if self.token.jwt_refresh_ttl_seconds <= 0 {
            return Err("JWT refresh TTL must be positive".to_string());
        }

        if self.role_cache.key_prefix.is_empty() {
            return Err("Role cache key prefix cannot be empty".to_string());
        }
        if self.role_cache.ttl_seconds == 0 {
            return Err("Role cache TTL cannot be 0".to_string());
        }

        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.logging.level.as_str()) {
            return Err(format!("Invalid log level '{}'. Valid values: {}", self.logging.level, valid_levels.join(", ")));
        }

        let valid_formats = ["pretty", "json", "compact"];
        if !valid_formats.contains(&self.logging.format.as_str()) {
            return Err(format!("Invalid log format '{}'. Valid values: {}", self.logging.format, valid_formats.join(", ")));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.runtime.role_cache_backend, "in-memory");
        assert_eq!(config.role_cache.key_prefix, "auth:token:");
    }

    #[test]
    fn redis_backend_without_url_is_invalid() {
        let mut config = Config::default();
        config.runtime.role_cache_backend = "redis".to_string();
        assert!(config.validate().is_err());

        config.runtime.redis_url = Some("redis://localhost".to_string());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn rejects_unknown_log_level() {
        let mut config = Config::default();
        config.logging.level = "verbose".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn from_env_overrides_defaults() {
        unsafe {
            env::set_var("IAM_TOKEN_JWT_ACCESS_TTL_SECONDS", "60");
            env::set_var("IAM_LOGGING_LEVEL", "debug");
        }

        let config = Config::from_env();
        assert_eq!(config.token.jwt_access_ttl_seconds, 60);
        assert_eq!(config.logging.level, "debug");

        unsafe {
            env::remove_var("IAM_TOKEN_JWT_ACCESS_TTL_SECONDS");
            env::remove_var("IAM_LOGGING_LEVEL");
        }
    }
}
