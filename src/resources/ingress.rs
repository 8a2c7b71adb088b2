// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use crate::error::Result;
use crate::kubernetes::{json_patch, json_request, resource_path};
use crate::resources::CLUSTER_SINGLETON;
use crate::types::Ingress;
use kube::Client;
use tracing::instrument;

/// GET `/apis/config.openshift.io/v1/ingresses/cluster`
#[instrument(skip(client, token))]
pub async fn get_ingress_config(client: &Client, token: &str) -> Result<Ingress> {
    json_request(client, &resource_path::<Ingress>(None, CLUSTER_SINGLETON), token).await
}

#[instrument(skip(client, token, patches))]
pub async fn patch_ingress_config(
    client: &Client,
    token: &str,
    patches: &json_patch::Patch,
) -> Result<Ingress> {
    json_patch(
        client,
        &resource_path::<Ingress>(None, CLUSTER_SINGLETON),
        patches,
        token,
    )
    .await
}
