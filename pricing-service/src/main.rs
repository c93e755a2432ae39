use std::net::SocketAddr;

use anyhow::{anyhow, Result};
use pricing_service::{bootstrap, config::AppConfig, metrics_server, observability, router};

#[tokio::main]
async fn main() -> Result<()> {
    observability::init_tracing();

    // Load configuration
    let cfg = AppConfig::load()?;

    // Start metrics server if configured
    if let Some(metrics_cfg) = &cfg.metrics {
        metrics_server::init(&metrics_cfg.bind_addr)?;
    }

    let service = bootstrap::build_service(&cfg)?;

    let addr: SocketAddr = cfg
        .http
        .bind_addr
        .parse()
        .map_err(|e| anyhow!("invalid http.bind_addr: {e}"))?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, "pricing service listening");

    axum::serve(listener, router(service).into_make_service()).await?;

    Ok(())
}
