// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use anyhow::Result;
use std::net::SocketAddr;
use tracing::info;
use tracing_subscriber::EnvFilter;

use ztpfw_setup::config::Config;
use ztpfw_setup::kubernetes::create_cluster_client;
use ztpfw_setup::server::{router, start_liveness_ping, AppState};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    info!("Starting ztpfw setup backend");

    let config = Config::from_env()?;
    info!(
        "Configuration loaded: cluster_api_url={}, backend_port={}",
        config.cluster_api_url, config.backend_port
    );

    let client = create_cluster_client(&config)?;
    let addr = SocketAddr::from(([0, 0, 0, 0], config.backend_port));
    let state = AppState::new(client, config);

    start_liveness_ping(state.clone());

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Listening on http://{}", addr);
    axum::serve(listener, router(state)).await?;

    Ok(())
}
