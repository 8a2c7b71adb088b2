// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use crate::constants::routes;
use crate::paths::cluster_domain_from_console_host;
use kube::CustomResource;
use serde::{Deserialize, Serialize};

/// Cluster-wide ingress configuration, `ingresses.config.openshift.io/cluster`
#[derive(CustomResource, Serialize, Deserialize, Clone, Debug, Default, schemars::JsonSchema)]
#[kube(
    group = "config.openshift.io",
    version = "v1",
    kind = "Ingress",
    plural = "ingresses"
)]
#[kube(status = "IngressStatus")]
#[serde(rename_all = "camelCase")]
pub struct IngressSpec {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub component_routes: Option<Vec<ComponentRoute>>,
}

/// Hostname and serving certificate override for a platform route
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ComponentRoute {
    pub hostname: String,
    pub name: String,
    pub namespace: String,
    pub serving_cert_key_pair_secret: SecretNameReference,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, schemars::JsonSchema)]
pub struct SecretNameReference {
    pub name: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct IngressStatus {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub component_routes: Option<Vec<ComponentRouteStatus>>,
}

#[derive(Serialize, Deserialize, Clone, Debug, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ComponentRouteStatus {
    pub name: String,
    pub namespace: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_hostname: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_hostnames: Option<Vec<String>>,
}

impl Ingress {
    /// Component routes from the spec, empty when none are configured
    pub fn component_routes(&self) -> &[ComponentRoute] {
        self.spec.component_routes.as_deref().unwrap_or_default()
    }

    /// Cluster domain currently served, derived from the console component
    /// route. The spec override wins over the hostname reported in status.
    pub fn cluster_domain(&self) -> Option<String> {
        let from_spec = self
            .component_routes()
            .iter()
            .find(|r| r.name == routes::CONSOLE)
            .and_then(|r| cluster_domain_from_console_host(&r.hostname));
        if let Some(domain) = from_spec {
            return Some(domain.to_string());
        }

        self.status
            .as_ref()
            .and_then(|s| s.component_routes.as_ref())
            .and_then(|rs| rs.iter().find(|r| r.name == routes::CONSOLE))
            .and_then(|r| r.current_hostnames.as_ref())
            .and_then(|hosts| {
                hosts
                    .iter()
                    .find_map(|h| cluster_domain_from_console_host(h))
            })
            .map(str::to_string)
    }
}
