// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use crate::error::{Result, SetupError};
use crate::kubernetes::{json_post, resource_path};
use k8s_openapi::api::core::v1::Secret;
use kube::Client;
use tracing::instrument;

/// POST the secret into its own namespace and return it as created, with
/// the server-generated name filled in
#[instrument(skip(client, token, secret))]
pub async fn create_secret(client: &Client, token: &str, secret: &Secret) -> Result<Secret> {
    let namespace = secret
        .metadata
        .namespace
        .as_deref()
        .ok_or_else(|| SetupError::MissingField("metadata.namespace".to_string()))?;
    json_post(client, &resource_path::<Secret>(Some(namespace), ""), secret, token).await
}
