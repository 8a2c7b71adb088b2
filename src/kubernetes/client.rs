// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Cluster API client creation

use crate::config::Config;
use crate::error::{Result, SetupError};
use kube::{Client, Config as KConfig};
use tracing::{info, instrument, warn};

/// Create the client used for every cluster API call.
///
/// The client carries no credentials of its own: each request is sent with
/// the bearer token of the user on whose behalf it is made.
#[instrument(skip(config), fields(cluster_api_url = %config.cluster_api_url))]
pub fn create_cluster_client(config: &Config) -> Result<Client> {
    let cluster_url: http::Uri = config.cluster_api_url.parse().map_err(|e| {
        SetupError::ClientError(format!(
            "Invalid cluster API URL {}: {}",
            config.cluster_api_url, e
        ))
    })?;

    let mut kube_config = KConfig::new(cluster_url);
    kube_config.accept_invalid_certs = config.insecure_skip_tls_verify;
    if config.insecure_skip_tls_verify {
        warn!("TLS verification of the cluster API server is disabled");
    }

    let client = Client::try_from(kube_config)
        .map_err(|e| SetupError::ClientError(format!("Failed to create client: {}", e)))?;
    info!("Cluster API client created");
    Ok(client)
}
