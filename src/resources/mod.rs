// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Per-kind helpers over the cluster API, one module per resource kind.

pub mod apiserver;
pub mod deployment;
pub mod ingress;
pub mod oauthclient;
pub mod route;
pub mod secret;

pub use apiserver::{get_api_server_config, merge_patch_api_server_config};
pub use deployment::{get_deployment, patch_deployment};
pub use ingress::{get_ingress_config, patch_ingress_config};
pub use oauthclient::{get_oauth_client, patch_oauth_client};
pub use route::{backup_route, get_route, patch_route};
pub use secret::create_secret;

use crate::error::Result;
use kube::Client;
use serde_json::Value;
use tracing::instrument;

/// Name of the cluster-scoped singleton config objects
pub const CLUSTER_SINGLETON: &str = "cluster";

/// Cheap authenticated read used by the liveness check
#[instrument(skip(client, token))]
pub async fn ping_api(client: &Client, token: &str) -> Result<()> {
    crate::kubernetes::json_request::<Value>(client, "/apis", token).await?;
    Ok(())
}
