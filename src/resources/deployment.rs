// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use crate::error::Result;
use crate::kubernetes::{json_patch, json_request, resource_path};
use k8s_openapi::api::apps::v1::Deployment;
use kube::Client;
use tracing::instrument;

/// GET `/apis/apps/v1/namespaces/{namespace}/deployments/{name}`
#[instrument(skip(client, token))]
pub async fn get_deployment(
    client: &Client,
    token: &str,
    namespace: &str,
    name: &str,
) -> Result<Deployment> {
    json_request(client, &resource_path::<Deployment>(Some(namespace), name), token).await
}

#[instrument(skip(client, token, patches))]
pub async fn patch_deployment(
    client: &Client,
    token: &str,
    namespace: &str,
    name: &str,
    patches: &json_patch::Patch,
) -> Result<Deployment> {
    json_patch(
        client,
        &resource_path::<Deployment>(Some(namespace), name),
        patches,
        token,
    )
    .await
}
