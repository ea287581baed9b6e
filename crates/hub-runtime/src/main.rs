//! # WebSub Hub Runtime
//!
//! Loads `HubConfig` from `HUB_*` environment variables, installs logging and
//! serves the hub until Ctrl-C.
//!
//! ## Environment
//!
//! | Variable                        | Default   |
//! |---------------------------------|-----------|
//! | `HUB_HOST`                      | `0.0.0.0` |
//! | `HUB_PORT`                      | `8080`    |
//! | `HUB_VERIFICATION_TIMEOUT_SECS` | `10`      |
//! | `HUB_DELIVERY_TIMEOUT_SECS`     | `10`      |
//! | `HUB_CONNECT_TIMEOUT_SECS`      | `5`       |
//! | `HUB_MAX_PAYLOAD_BYTES`         | `1048576` |
//!
//! `RUST_LOG` selects log levels (default `info`).

use std::str::FromStr;

use anyhow::{Context, Result};
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use websub_hub::{HubConfig, HubServer};

/// Parse one variable into `target`; unparsable values are logged and skipped.
fn override_from<T, F>(lookup: &F, name: &str, target: &mut T)
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    if let Some(raw) = lookup(name) {
        match raw.trim().parse() {
            Ok(value) => *target = value,
            Err(_) => warn!(variable = name, value = %raw, "Ignoring invalid value"),
        }
    }
}

fn load_config_from<F>(lookup: F) -> HubConfig
where
    F: Fn(&str) -> Option<String>,
{
    let mut config = HubConfig::default();

    override_from(&lookup, "HUB_HOST", &mut config.http.host);
    override_from(&lookup, "HUB_PORT", &mut config.http.port);
    override_from(
        &lookup,
        "HUB_VERIFICATION_TIMEOUT_SECS",
        &mut config.timeouts.verification_secs,
    );
    override_from(
        &lookup,
        "HUB_DELIVERY_TIMEOUT_SECS",
        &mut config.timeouts.delivery_secs,
    );
    override_from(
        &lookup,
        "HUB_CONNECT_TIMEOUT_SECS",
        &mut config.timeouts.connect_secs,
    );
    override_from(
        &lookup,
        "HUB_MAX_PAYLOAD_BYTES",
        &mut config.limits.max_payload_bytes,
    );

    config
}

fn load_config() -> HubConfig {
    load_config_from(|name| std::env::var(name).ok())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "Failed to listen for Ctrl-C");
        std::future::pending::<()>().await;
    }
    info!("Received shutdown signal");
}

#[tokio::main]
async fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(true)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let config = load_config();
    info!(
        addr = %config.http_addr(),
        verification_timeout_secs = config.timeouts.verification_secs,
        delivery_timeout_secs = config.timeouts.delivery_secs,
        max_payload_bytes = config.limits.max_payload_bytes,
        version = websub_hub::VERSION,
        "Starting WebSub hub"
    );

    let server = HubServer::from_config(&config)
        .await
        .context("Failed to start hub")?;
    server
        .serve(shutdown_signal())
        .await
        .context("Hub server error")?;

    Ok(())
}
