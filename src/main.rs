//! IAM policy administration core — composition root.
//!
//! Loads configuration, initializes tracing, wires every adapter and use
//! case (`bootstrap::bootstrap`), and checks every command/query named in
//! `spec.md` §6 has a registered handler before declaring itself ready.
//! There is no HTTP layer here — `spec.md` §1 keeps controllers out of
//! scope; this binary is the core a surrounding API/guard would embed.

use iam_policy_core::bootstrap::bootstrap;
use iam_policy_core::config::Config;
use iam_policy_core::logging;
use kernel::EventBus;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::from_env();
    config.validate()?;

    logging::init(&config.logging)?;

    info!("starting iam-policy-core");
    info!(role_cache_backend = %config.runtime.role_cache_backend, "configuration loaded");

    let state = bootstrap(&config).await.map_err(|e| {
        eprintln!("bootstrap failed: {e}");
        e
    })?;

    info!(
        subscriptions = state.events.subscription_count(),
        "iam-policy-core ready: every command and query handler is registered"
    );

    shutdown_signal().await;
    info!("iam-policy-core shutting down");
    Ok(())
}

async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        signal::ctrl_c().await.expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }
}
