//! Tracing initialization, lifted from the teacher's `main.rs::initialize_logging`
//! almost verbatim: an `EnvFilter` seeded per-crate from `config.logging.level`
//! when `RUST_LOG` isn't set, and a format layer selected by
//! `config.logging.format`.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::LoggingConfig;

pub fn init(config: &LoggingConfig) -> Result<(), Box<dyn std::error::Error>> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "iam_policy_core={level},policies={level},enforcer={level},principal={level},cqrs={level},kernel={level}",
            level = config.level
        ))
    });

    match config.format.as_str() {
        "json" => {
            tracing_subscriber::registry().with(env_filter).with(fmt::layer().json()).init();
        }
        "compact" => {
            tracing_subscriber::registry().with(env_filter).with(fmt::layer().compact()).init();
        }
        _ => {
            tracing_subscriber::registry().with(env_filter).with(fmt::layer().pretty()).init();
        }
    }

    Ok(())
}
