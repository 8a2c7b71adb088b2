// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Pure construction of the patches sent during a domain change.

use crate::constants::env;
use crate::error::{Result, SetupError};
use crate::types::apiserver::{ApiServerPatch, ApiServerSpec, NamedCertificate, ServingCerts};
use crate::types::ingress::{ComponentRoute, SecretNameReference};
use crate::types::{OAuthClient, Route};
use json_patch::{AddOperation, Patch, PatchOperation, ReplaceOperation};
use jsonptr::PointerBuf;
use k8s_openapi::api::apps::v1::Deployment;
use k8s_openapi::api::core::v1::EnvVar;
use serde_json::Value;
use tracing::{debug, warn};
use url::Url;

/// `replace` when the target field already exists, `add` otherwise
fn set_operation<'t>(
    exists: bool,
    tokens: impl IntoIterator<Item = &'t str>,
    value: Value,
) -> PatchOperation {
    let path = PointerBuf::from_tokens(tokens);
    if exists {
        PatchOperation::Replace(ReplaceOperation { path, value })
    } else {
        PatchOperation::Add(AddOperation { path, value })
    }
}

/// Base URL the wizard is served from on `wizard_domain`
pub fn frontend_url(wizard_domain: &str) -> Result<String> {
    let url = Url::parse(&format!("https://{}", wizard_domain))
        .map_err(|e| SetupError::InvalidDomain(format!("{}: {}", wizard_domain, e)))?;
    Ok(url.origin().ascii_serialization())
}

/// OAuth login callback of the wizard served on `wizard_domain`
pub fn redirect_uri(wizard_domain: &str) -> Result<String> {
    let url = Url::parse(&format!("https://{}/", wizard_domain))
        .and_then(|base| base.join("login/callback"))
        .map_err(|e| SetupError::InvalidDomain(format!("{}: {}", wizard_domain, e)))?;
    Ok(url.to_string())
}

/// Point the component route `name` at `hostname` served with `secret_name`,
/// appending a new entry when the route is not overridden yet
pub fn upsert_component_route(
    routes: &mut Vec<ComponentRoute>,
    name: &str,
    namespace: &str,
    hostname: &str,
    secret_name: &str,
) {
    match routes.iter_mut().find(|r| r.name == name) {
        Some(route) => {
            route.hostname = hostname.to_string();
            route.serving_cert_key_pair_secret.name = secret_name.to_string();
        }
        None => routes.push(ComponentRoute {
            hostname: hostname.to_string(),
            name: name.to_string(),
            namespace: namespace.to_string(),
            serving_cert_key_pair_secret: SecretNameReference {
                name: secret_name.to_string(),
            },
        }),
    }
}

/// Set `/spec/componentRoutes` of the ingress config to `routes`
pub fn component_routes_patch(existing: bool, routes: &[ComponentRoute]) -> Result<Patch> {
    Ok(Patch(vec![set_operation(
        existing,
        ["spec", "componentRoutes"],
        serde_json::to_value(routes)?,
    )]))
}

/// Serve `api_domain` with the certificate in `secret_name`
pub fn api_server_patch(api_domain: &str, secret_name: &str) -> ApiServerPatch {
    ApiServerPatch {
        spec: ApiServerSpec {
            serving_certs: Some(ServingCerts {
                named_certificates: Some(vec![NamedCertificate {
                    names: vec![api_domain.to_string()],
                    serving_certificate: SecretNameReference {
                        name: secret_name.to_string(),
                    },
                }]),
            }),
        },
    }
}

/// Move `route` to `host`. `None` when the route has no host to replace or
/// already serves `host`.
pub fn route_host_patch(route: &Route, host: &str) -> Option<Patch> {
    match route.spec.host.as_deref() {
        None => {
            debug!("Route has no host, skipping host update");
            None
        }
        Some(current) if current == host => {
            debug!("Route already served on {}", host);
            None
        }
        Some(_) => Some(Patch(vec![PatchOperation::Replace(ReplaceOperation {
            path: PointerBuf::from_tokens(["spec", "host"]),
            value: Value::String(host.to_string()),
        })])),
    }
}

/// Append `uri` to the client's redirect URIs. `None` when already present.
pub fn redirect_uri_patch(client: &OAuthClient, uri: &str) -> Option<Patch> {
    if client.has_redirect_uri(uri) {
        debug!("OAuth client already redirects to {}", uri);
        return None;
    }
    let mut uris = client.redirect_uris.clone().unwrap_or_default();
    uris.push(uri.to_string());
    Some(Patch(vec![set_operation(
        client.redirect_uris.is_some(),
        ["redirectURIs"],
        Value::from(uris),
    )]))
}

fn set_env(vars: &mut [EnvVar], name: &str, value: &str) {
    match vars.iter_mut().find(|e| e.name == name) {
        Some(var) => var.value = Some(value.to_string()),
        None => warn!("Can not find {} env variable in the wizard deployment", name),
    }
}

/// Rewrite the wizard URLs in the environment of the deployment's first
/// container. The whole container list is replaced.
pub fn deployment_env_patch(
    deployment: &Deployment,
    frontend_url: &str,
    redirect_uri: &str,
) -> Result<Patch> {
    let mut containers = deployment
        .spec
        .as_ref()
        .and_then(|s| s.template.spec.as_ref())
        .map(|s| s.containers.clone())
        .filter(|c| !c.is_empty())
        .ok_or_else(|| SetupError::MissingField("spec.template.spec.containers".to_string()))?;

    let vars = containers[0]
        .env
        .as_mut()
        .ok_or_else(|| SetupError::MissingField("spec.template.spec.containers[0].env".to_string()))?;
    set_env(vars, env::FRONTEND_URL, frontend_url);
    set_env(vars, env::OAUTH2_REDIRECT_URL, redirect_uri);

    Ok(Patch(vec![PatchOperation::Replace(ReplaceOperation {
        path: PointerBuf::from_tokens(["spec", "template", "spec", "containers"]),
        value: serde_json::to_value(&containers)?,
    })]))
}
