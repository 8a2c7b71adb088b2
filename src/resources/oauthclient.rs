// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use crate::error::Result;
use crate::kubernetes::{json_patch, json_request, resource_path};
use crate::types::OAuthClient;
use kube::Client;
use tracing::instrument;

/// GET `/apis/oauth.openshift.io/v1/oauthclients/{name}`
#[instrument(skip(client, token))]
pub async fn get_oauth_client(client: &Client, token: &str, name: &str) -> Result<OAuthClient> {
    json_request(client, &resource_path::<OAuthClient>(None, name), token).await
}

/// Apply `patches` in order to the named OAuth client, returning the updated object
#[instrument(skip(client, token, patches))]
pub async fn patch_oauth_client(
    client: &Client,
    token: &str,
    name: &str,
    patches: &json_patch::Patch,
) -> Result<OAuthClient> {
    json_patch(client, &resource_path::<OAuthClient>(None, name), patches, token).await
}
