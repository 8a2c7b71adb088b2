// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use crate::error::Result;
use crate::kubernetes::{json_merge_patch, json_request, resource_path};
use crate::resources::CLUSTER_SINGLETON;
use crate::types::apiserver::ApiServerPatch;
use crate::types::ApiServer;
use kube::Client;
use tracing::instrument;

/// GET `/apis/config.openshift.io/v1/apiservers/cluster`
#[instrument(skip(client, token))]
pub async fn get_api_server_config(client: &Client, token: &str) -> Result<ApiServer> {
    json_request(client, &resource_path::<ApiServer>(None, CLUSTER_SINGLETON), token).await
}

/// Merge `patch` into the API server config. Lists in a merge patch replace
/// the existing value as a whole.
#[instrument(skip(client, token, patch))]
pub async fn merge_patch_api_server_config(
    client: &Client,
    token: &str,
    patch: &ApiServerPatch,
) -> Result<ApiServer> {
    json_merge_patch(
        client,
        &resource_path::<ApiServer>(None, CLUSTER_SINGLETON),
        patch,
        token,
    )
    .await
}
