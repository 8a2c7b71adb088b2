// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use crate::error::{Result, SetupError};
use crate::kubernetes::{json_patch, json_post, json_request, resource_path};
use crate::paths::backup_route_name;
use crate::types::Route;
use kube::{Client, ResourceExt};
use tracing::{debug, info, instrument};

/// GET `/apis/route.openshift.io/v1/namespaces/{namespace}/routes/{name}`
#[instrument(skip(client, token))]
pub async fn get_route(client: &Client, token: &str, namespace: &str, name: &str) -> Result<Route> {
    json_request(client, &resource_path::<Route>(Some(namespace), name), token).await
}

#[instrument(skip(client, token, patches))]
pub async fn patch_route(
    client: &Client,
    token: &str,
    namespace: &str,
    name: &str,
    patches: &json_patch::Patch,
) -> Result<Route> {
    json_patch(
        client,
        &resource_path::<Route>(Some(namespace), name),
        patches,
        token,
    )
    .await
}

/// Keep a copy of `route` under [`backup_route_name`] so the old host keeps
/// answering while the original is re-hosted. An existing copy is left as is.
#[instrument(skip(client, token, route), fields(route = %route.name_any()))]
pub async fn backup_route(client: &Client, token: &str, route: &Route) -> Result<Route> {
    let namespace = route
        .namespace()
        .ok_or_else(|| SetupError::MissingField("metadata.namespace".to_string()))?;
    let backup_name = backup_route_name(&route.name_any());
    let copy = route.copy_as(&backup_name);

    match json_post(client, &resource_path::<Route>(Some(&namespace), ""), &copy, token).await {
        Ok(created) => {
            info!("Route {}/{} backed up", namespace, backup_name);
            Ok(created)
        }
        Err(SetupError::KubeError(kube::Error::Api(err))) if err.code == 409 => {
            debug!("Backup route {}/{} already exists", namespace, backup_name);
            get_route(client, token, &namespace, &backup_name).await
        }
        Err(e) => Err(e),
    }
}
