// SPDX-FileCopyrightText: 2026 Shiftcast Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `shiftcast serve` command implementation.
//!
//! Wires the in-memory store, notifier, and intent classifier into the
//! fanout engine, then runs the HTTP gateway until a shutdown signal
//! arrives. Escalation timers live on the runtime and die with it; a
//! restarted process starts with a clean slate.

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use tracing::{info, warn};

use shiftcast_config::ShiftcastConfig;
use shiftcast_core::{ShiftcastError, StorageAdapter};
use shiftcast_engine::{AppContext, KeywordClassifier};
use shiftcast_gateway::{GatewayState, ServerConfig};
use shiftcast_notify::LogNotifier;
use shiftcast_store::{MemoryStore, load_seed_file};

/// Runs the `shiftcast serve` command.
pub async fn run_serve(config: ShiftcastConfig) -> Result<(), ShiftcastError> {
    init_tracing(&config.agent.log_level);

    info!(agent = %config.agent.name, "starting shiftcast");

    let store = Arc::new(MemoryStore::new());
    store.initialize().await?;

    if let Some(seed_path) = &config.storage.seed_file {
        info!(path = %seed_path, "loading seed file");
        load_seed_file(&store, Path::new(seed_path))?;
    } else {
        warn!("no seed file configured, starting with empty store");
    }

    let ctx = AppContext::build(
        store,
        Arc::new(LogNotifier::new()),
        Arc::new(KeywordClassifier::new()),
        Duration::from_secs(config.fanout.escalation_delay_secs),
    );

    let server_config = ServerConfig {
        host: config.gateway.host.clone(),
        port: config.gateway.port,
    };
    let state = GatewayState::new(ctx);

    tokio::select! {
        result = shiftcast_gateway::start_server(&server_config, state) => result?,
        () = shutdown_signal() => {}
    }

    info!("shiftcast serve shutdown complete");
    Ok(())
}

/// Resolves when SIGTERM or SIGINT (Ctrl+C) is received.
async fn shutdown_signal() {
    let ctrl_c = tokio::signal::ctrl_c();

    #[cfg(unix)]
    {
        use tokio::signal::unix::{SignalKind, signal};

        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                tokio::select! {
                    _ = ctrl_c => {
                        info!("received SIGINT (Ctrl+C), initiating shutdown");
                    }
                    _ = sigterm.recv() => {
                        info!("received SIGTERM, initiating shutdown");
                    }
                }
            }
            Err(e) => {
                warn!(error = %e, "failed to install SIGTERM handler, watching Ctrl+C only");
                let _ = ctrl_c.await;
                info!("received Ctrl+C, initiating shutdown");
            }
        }
    }

    #[cfg(not(unix))]
    {
        let _ = ctrl_c.await;
        info!("received Ctrl+C, initiating shutdown");
    }
}

/// Initializes the tracing subscriber with the given log level.
fn init_tracing(log_level: &str) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("shiftcast={log_level},warn")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_names(false)
        .init();
}
