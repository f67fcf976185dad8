//! DCP UI - web host for the DCP station manager
//!
//! Serves the frontend bundle and forwards its API calls to the DCP server
//! that owns discovery and station state.

pub mod config;
pub mod error;
pub mod server;
pub mod upstream;

pub use config::{load_config, Config};
pub use error::{DcpUiError, Result};

use std::net::SocketAddr;
use std::sync::Arc;

use tokio_util::sync::CancellationToken;

use crate::upstream::{ReqwestUpstream, Upstream};

/// Resolve the configured listen address
pub fn listen_addr(config: &Config) -> Result<SocketAddr> {
    format!("{}:{}", config.server.bind_address, config.server.port)
        .parse()
        .map_err(|e| {
            DcpUiError::Config(format!(
                "Invalid listen address {}:{}: {}",
                config.server.bind_address, config.server.port, e
            ))
        })
}

/// Run the DCP UI host until Ctrl-C
pub async fn run(config: Config) -> Result<()> {
    let cancel = CancellationToken::new();

    let cancel_for_signal = cancel.clone();
    tokio::spawn(async move {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to listen for ctrl-c");
        tracing::info!("Shutdown signal received");
        cancel_for_signal.cancel();
    });

    serve(config, cancel).await
}

/// Run the DCP UI host until `cancel` fires
pub async fn serve(config: Config, cancel: CancellationToken) -> Result<()> {
    let upstream: Arc<dyn Upstream> = Arc::new(ReqwestUpstream::new(&config.upstream)?);
    let router = server::build_router(upstream, &config.site);
    let addr = listen_addr(&config)?;

    let listener = tokio::net::TcpListener::bind(addr).await.map_err(|e| {
        tracing::error!("Failed to bind to {}: {}", addr, e);
        e
    })?;
    tracing::info!("DCP UI listening on http://{}", listener.local_addr()?);
    tracing::info!("Forwarding API calls to {}", config.upstream.base_url);

    axum::serve(listener, router)
        .with_graceful_shutdown(async move {
            cancel.cancelled().await;
        })
        .await?;

    tracing::info!("DCP UI stopped");
    Ok(())
}
