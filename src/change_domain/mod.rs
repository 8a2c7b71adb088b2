// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Move the cluster to a new base domain.
//!
//! New TLS secrets are created for the API server and for the console, OAuth
//! and wizard routes, then the ingress and API server configs are patched to
//! serve them. Those two patches are mandatory. Updating the wizard itself
//! (route, OAuth callback, deployment env) follows on a best effort basis;
//! the deployment change restarts the pod serving this backend.

pub mod plan;

use crate::certificates::create_certificate_secret;
use crate::config::ClusterNames;
use crate::constants::{routes, secret_prefixes};
use crate::error::{Result, SetupError};
use crate::paths::{api_domain, console_domain, ingress_domain, oauth_domain, wizard_domain};
use crate::resources::{
    backup_route, get_deployment, get_ingress_config, get_oauth_client, get_route,
    merge_patch_api_server_config, patch_deployment, patch_ingress_config, patch_oauth_client,
    patch_route,
};
use crate::types::{ChangeDomainInput, ClusterResource, ResourceSummary};
use crate::validation::{validate_input, DNS_NAME_REGEX};
use kube::Client;
use serde::Serialize;
use tracing::{debug, error, info, instrument};

#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum ChangeDomainOutcome {
    /// The ingress already serves the requested domain, nothing was written
    Unchanged,
    Changed,
}

/// What a domain change did to the cluster
#[derive(Debug)]
pub struct ChangeDomainReport {
    pub cluster_domain: String,
    pub outcome: ChangeDomainOutcome,
    /// Resources created or updated, in the order they were written
    pub resources: Vec<ClusterResource>,
    /// Failed best effort steps
    pub warnings: Vec<String>,
}

impl ChangeDomainReport {
    pub fn summaries(&self) -> Vec<ResourceSummary> {
        self.resources.iter().map(ClusterResource::summary).collect()
    }
}

/// A component route to point at the new domain
struct ComponentRouteTarget<'a> {
    name: &'static str,
    namespace: &'a str,
    secret_prefix: &'static str,
    hostname: String,
}

#[instrument(skip(client, token, names, input), fields(domain = ?input.cluster_domain))]
pub async fn change_domain(
    client: &Client,
    token: &str,
    names: &ClusterNames,
    input: &ChangeDomainInput,
) -> Result<ChangeDomainReport> {
    let cluster_domain = validate_input(&DNS_NAME_REGEX, input.cluster_domain.as_deref())
        .ok_or_else(|| {
            SetupError::InvalidDomain(input.cluster_domain.clone().unwrap_or_default())
        })?
        .to_string();
    let custom_certs = input.decoded_custom_certs()?;

    let ingress = get_ingress_config(client, token).await?;
    let old_ingress_domain = ingress_domain(&ingress.cluster_domain().unwrap_or_default());
    let new_ingress_domain = ingress_domain(&cluster_domain);
    if old_ingress_domain == new_ingress_domain {
        info!("Domain stays unchanged (based on the ingress config), nothing to persist");
        return Ok(ChangeDomainReport {
            cluster_domain,
            outcome: ChangeDomainOutcome::Unchanged,
            resources: Vec::new(),
            warnings: Vec::new(),
        });
    }

    let api_host = api_domain(&cluster_domain);
    info!(
        "Changing domain from {} to {} (api: {})",
        old_ingress_domain, new_ingress_domain, api_host
    );
    let mut resources = Vec::new();

    let api_secret = create_certificate_secret(
        client,
        token,
        &names.tls_secret_namespace,
        secret_prefixes::API,
        &api_host,
        custom_certs.get(&api_host),
    )
    .await?;
    let api_server_patch = plan::api_server_patch(&api_host, &api_secret.name);
    resources.push(ClusterResource::Secret(api_secret.secret));

    let wizard_host = wizard_domain(&cluster_domain);
    let targets = [
        ComponentRouteTarget {
            name: routes::CONSOLE,
            namespace: &names.console_namespace,
            secret_prefix: secret_prefixes::CONSOLE,
            hostname: console_domain(&cluster_domain),
        },
        ComponentRouteTarget {
            name: routes::OAUTH,
            namespace: &names.oauth_namespace,
            secret_prefix: secret_prefixes::OAUTH,
            hostname: oauth_domain(&cluster_domain),
        },
        ComponentRouteTarget {
            name: routes::WIZARD,
            namespace: &names.wizard_namespace,
            secret_prefix: secret_prefixes::WIZARD,
            hostname: wizard_host.clone(),
        },
    ];

    let mut component_routes = ingress.component_routes().to_vec();
    for target in &targets {
        let secret = create_certificate_secret(
            client,
            token,
            &names.tls_secret_namespace,
            target.secret_prefix,
            &target.hostname,
            custom_certs.get(&target.hostname),
        )
        .await?;
        plan::upsert_component_route(
            &mut component_routes,
            target.name,
            target.namespace,
            &target.hostname,
            &secret.name,
        );
        debug!("Component route {} will be served on {}", target.name, target.hostname);
        resources.push(ClusterResource::Secret(secret.secret));
    }

    let ingress_patch = plan::component_routes_patch(
        ingress.spec.component_routes.is_some(),
        &component_routes,
    )?;
    let ingress = patch_ingress_config(client, token, &ingress_patch).await?;
    info!("Ingress config patched");
    resources.push(ClusterResource::Ingress(ingress));

    let api_server = merge_patch_api_server_config(client, token, &api_server_patch).await?;
    info!("API server config patched");
    resources.push(ClusterResource::ApiServer(api_server));

    let warnings = update_wizard(client, token, names, &wizard_host, &mut resources).await;

    Ok(ChangeDomainReport {
        cluster_domain,
        outcome: ChangeDomainOutcome::Changed,
        resources,
        warnings,
    })
}

/// Point the wizard at `wizard_host`. Failures are logged and returned as
/// warnings, the domain change itself has already been persisted.
async fn update_wizard(
    client: &Client,
    token: &str,
    names: &ClusterNames,
    wizard_host: &str,
    resources: &mut Vec<ClusterResource>,
) -> Vec<String> {
    let mut warnings = Vec::new();

    match update_wizard_route(client, token, names, wizard_host).await {
        Ok(updated) => resources.extend(updated),
        Err(e) => {
            error!("Failed to update the wizard route: {}", e);
            warnings.push(format!("wizard route: {}", e));
        }
    }

    let redirect_uri = match plan::redirect_uri(wizard_host) {
        Ok(uri) => uri,
        Err(e) => {
            warnings.push(format!("wizard redirect URI: {}", e));
            return warnings;
        }
    };

    match update_oauth_redirect_uri(client, token, names, &redirect_uri).await {
        Ok(updated) => resources.extend(updated),
        Err(e) => {
            error!("Failed to patch the wizard OAuth client: {}", e);
            warnings.push(format!("OAuth client: {}", e));
        }
    }

    match update_wizard_deployment(client, token, names, wizard_host, &redirect_uri).await {
        Ok(updated) => resources.push(updated),
        Err(e) => {
            error!("Failed to patch the wizard deployment: {}", e);
            warnings.push(format!("wizard deployment: {}", e));
        }
    }

    warnings
}

/// Keep a copy of the wizard route on the old host so the browser can keep
/// polling it, then move the route to `wizard_host`
async fn update_wizard_route(
    client: &Client,
    token: &str,
    names: &ClusterNames,
    wizard_host: &str,
) -> Result<Vec<ClusterResource>> {
    let route = get_route(client, token, &names.wizard_namespace, &names.wizard_route).await?;
    let mut updated = vec![ClusterResource::Route(
        backup_route(client, token, &route).await?,
    )];

    if let Some(patch) = plan::route_host_patch(&route, wizard_host) {
        let patched = patch_route(
            client,
            token,
            &names.wizard_namespace,
            &names.wizard_route,
            &patch,
        )
        .await?;
        info!("Wizard route moved to {}", wizard_host);
        updated.push(ClusterResource::Route(patched));
    }
    Ok(updated)
}

async fn update_oauth_redirect_uri(
    client: &Client,
    token: &str,
    names: &ClusterNames,
    redirect_uri: &str,
) -> Result<Option<ClusterResource>> {
    let oauth_client = get_oauth_client(client, token, &names.oauth_client).await?;
    let Some(patch) = plan::redirect_uri_patch(&oauth_client, redirect_uri) else {
        return Ok(None);
    };
    let patched = patch_oauth_client(client, token, &names.oauth_client, &patch).await?;
    info!("OAuth client {} now redirects to {}", names.oauth_client, redirect_uri);
    Ok(Some(ClusterResource::OAuthClient(patched)))
}

async fn update_wizard_deployment(
    client: &Client,
    token: &str,
    names: &ClusterNames,
    wizard_host: &str,
    redirect_uri: &str,
) -> Result<ClusterResource> {
    let deployment = get_deployment(
        client,
        token,
        &names.wizard_namespace,
        &names.wizard_deployment,
    )
    .await?;
    let patch = plan::deployment_env_patch(&deployment, &plan::frontend_url(wizard_host)?, redirect_uri)?;
    let patched = patch_deployment(
        client,
        token,
        &names.wizard_namespace,
        &names.wizard_deployment,
        &patch,
    )
    .await?;
    info!("Wizard deployment patched");
    Ok(ClusterResource::Deployment(patched))
}
