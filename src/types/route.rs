// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use kube::{api::ObjectMeta, CustomResource, ResourceExt};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// `route.openshift.io/v1` Route. Only `host` is interpreted, the rest is
/// carried through untouched.
#[derive(CustomResource, Serialize, Deserialize, Clone, Debug, Default, schemars::JsonSchema)]
#[kube(group = "route.openshift.io", version = "v1", kind = "Route")]
#[kube(namespaced)]
#[serde(rename_all = "camelCase")]
pub struct RouteSpec {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tls: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wildcard_policy: Option<Value>,
}

impl Route {
    /// A fresh object carrying this route's spec under `name`, suitable for
    /// creation. Server-managed metadata is dropped.
    pub fn copy_as(&self, name: &str) -> Route {
        Route {
            metadata: ObjectMeta {
                name: Some(name.to_string()),
                namespace: self.namespace(),
                labels: self.metadata.labels.clone(),
                annotations: self.metadata.annotations.clone(),
                ..Default::default()
            },
            spec: self.spec.clone(),
        }
    }
}
