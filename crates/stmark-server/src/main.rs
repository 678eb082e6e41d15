// SPDX-License-Identifier: Apache-2.0

#![forbid(unsafe_code)]

use std::sync::Arc;
use stmark_model::BlockRegistry;
use stmark_server::{
    build_router, validate_startup_config, ApiConfig, AppState, InMemoryPageStore,
    JsonFilePageStore, PageStoreBackend,
};
use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

async fn wait_for_shutdown_signal() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};
        match (
            signal(SignalKind::terminate()),
            signal(SignalKind::interrupt()),
        ) {
            (Ok(mut sigterm), Ok(mut sigint)) => {
                tokio::select! {
                    _ = sigterm.recv() => {}
                    _ = sigint.recv() => {}
                }
            }
            _ => {
                warn!("signal handlers unavailable, falling back to ctrl-c");
                let _ = tokio::signal::ctrl_c().await;
            }
        }
    }
    #[cfg(not(unix))]
    {
        let _ = tokio::signal::ctrl_c().await;
    }
}

fn init_tracing(log_json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if log_json {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }
}

#[tokio::main]
async fn main() -> Result<(), String> {
    let api_cfg = ApiConfig::from_env();
    init_tracing(api_cfg.log_json);
    validate_startup_config(&api_cfg)?;
    match serde_json::to_string(&api_cfg) {
        Ok(config) => info!(config = %config, "api config loaded"),
        Err(e) => warn!(error = %e, "api config not serializable"),
    }

    let registry =
        Arc::new(BlockRegistry::standard().map_err(|e| format!("block registry invalid: {e}"))?);
    let store: Arc<dyn PageStoreBackend> = match &api_cfg.pages_file {
        Some(path) => {
            let store = JsonFilePageStore::new(path.clone(), registry.clone());
            // Re-read on every request, so a bad export at boot is only logged.
            if let Err(e) = store.fetch_pages().await {
                warn!(path = %path.display(), error = %e, "page export not readable at startup");
            }
            Arc::new(store)
        }
        None => Arc::new(InMemoryPageStore::default_site(&registry)),
    };

    let bind_addr = api_cfg.bind_addr.clone();
    let drain = api_cfg.shutdown_drain;
    info!(
        backend = store.backend_tag(),
        block_types = registry.len(),
        "page store ready"
    );
    let state = AppState::with_config(registry, store, api_cfg);
    let app = build_router(state);

    let addr: std::net::SocketAddr = bind_addr
        .parse()
        .map_err(|e| format!("invalid bind addr {bind_addr}: {e}"))?;
    let socket = if addr.is_ipv4() {
        tokio::net::TcpSocket::new_v4().map_err(|e| format!("socket v4 failed: {e}"))?
    } else {
        tokio::net::TcpSocket::new_v6().map_err(|e| format!("socket v6 failed: {e}"))?
    };
    socket
        .set_reuseaddr(true)
        .map_err(|e| format!("set_reuseaddr failed: {e}"))?;
    socket.bind(addr).map_err(|e| format!("bind failed: {e}"))?;
    let listener: TcpListener = socket
        .listen(1024)
        .map_err(|e| format!("listen failed: {e}"))?;
    info!("stmark-server listening on {bind_addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            wait_for_shutdown_signal().await;
            info!(drain_ms = drain.as_millis() as u64, "shutdown requested, draining");
            tokio::time::sleep(drain).await;
        })
        .await
        .map_err(|e| format!("server failed: {e}"))
}
