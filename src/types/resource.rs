// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! One variant per resource kind handled by the wizard backend.

use crate::error::{Result, SetupError};
use crate::types::{ApiServer, Ingress, OAuthClient, Route};
use k8s_openapi::api::apps::v1::Deployment;
use k8s_openapi::api::core::v1::Secret;
use kube::error::ErrorResponse;
use kube::Resource;
use serde::Serialize;
use serde_json::Value;

#[derive(Clone, Debug)]
pub enum ClusterResource {
    Secret(Secret),
    Ingress(Ingress),
    ApiServer(ApiServer),
    OAuthClient(OAuthClient),
    Route(Route),
    Deployment(Deployment),
    Status(ErrorResponse),
}

/// Kind and coordinates of a resource, as reported back to the UI
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct ResourceSummary {
    pub kind: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
}

fn is_kind<K: Resource<DynamicType = ()>>(api_version: &str, kind: &str) -> bool {
    K::api_version(&()) == api_version && K::kind(&()) == kind
}

impl ClusterResource {
    /// Decode a raw API object by its `apiVersion`/`kind` pair
    pub fn from_value(value: Value) -> Result<Self> {
        let field = |name: &str| {
            value
                .get(name)
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string()
        };
        let api_version = field("apiVersion");
        let kind = field("kind");

        let resource = match (api_version.as_str(), kind.as_str()) {
            (v, k) if is_kind::<Secret>(v, k) => Self::Secret(serde_json::from_value(value)?),
            (v, k) if is_kind::<Ingress>(v, k) => Self::Ingress(serde_json::from_value(value)?),
            (v, k) if is_kind::<ApiServer>(v, k) => Self::ApiServer(serde_json::from_value(value)?),
            (v, k) if is_kind::<OAuthClient>(v, k) => {
                Self::OAuthClient(serde_json::from_value(value)?)
            }
            (v, k) if is_kind::<Route>(v, k) => Self::Route(serde_json::from_value(value)?),
            (v, k) if is_kind::<Deployment>(v, k) => {
                Self::Deployment(serde_json::from_value(value)?)
            }
            ("v1", "Status") => Self::Status(serde_json::from_value(value)?),
            _ => return Err(SetupError::UnknownResource { api_version, kind }),
        };
        Ok(resource)
    }

    pub fn kind(&self) -> String {
        match self {
            Self::Secret(_) => Secret::kind(&()).to_string(),
            Self::Ingress(_) => Ingress::kind(&()).to_string(),
            Self::ApiServer(_) => ApiServer::kind(&()).to_string(),
            Self::OAuthClient(_) => OAuthClient::kind(&()).to_string(),
            Self::Route(_) => Route::kind(&()).to_string(),
            Self::Deployment(_) => Deployment::kind(&()).to_string(),
            Self::Status(_) => "Status".to_string(),
        }
    }

    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Secret(r) => r.metadata.name.as_deref(),
            Self::Ingress(r) => r.metadata.name.as_deref(),
            Self::ApiServer(r) => r.metadata.name.as_deref(),
            Self::OAuthClient(r) => r.metadata.name.as_deref(),
            Self::Route(r) => r.metadata.name.as_deref(),
            Self::Deployment(r) => r.metadata.name.as_deref(),
            Self::Status(_) => None,
        }
    }

    pub fn namespace(&self) -> Option<&str> {
        match self {
            Self::Secret(r) => r.metadata.namespace.as_deref(),
            Self::Route(r) => r.metadata.namespace.as_deref(),
            Self::Deployment(r) => r.metadata.namespace.as_deref(),
            Self::Ingress(_) | Self::ApiServer(_) | Self::OAuthClient(_) | Self::Status(_) => None,
        }
    }

    pub fn summary(&self) -> ResourceSummary {
        ResourceSummary {
            kind: self.kind(),
            name: self.name().map(str::to_string),
            namespace: self.namespace().map(str::to_string),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_value_oauth_client() {
        let resource = ClusterResource::from_value(json!({
            "apiVersion": "oauth.openshift.io/v1",
            "kind": "OAuthClient",
            "metadata": { "name": "ztpfwoauth" },
            "redirectURIs": []
        }))
        .unwrap();

        assert!(matches!(resource, ClusterResource::OAuthClient(_)));
        assert_eq!(
            resource.summary(),
            ResourceSummary {
                kind: "OAuthClient".to_string(),
                name: Some("ztpfwoauth".to_string()),
                namespace: None,
            }
        );
    }

    #[test]
    fn test_from_value_secret() {
        let resource = ClusterResource::from_value(json!({
            "apiVersion": "v1",
            "kind": "Secret",
            "metadata": { "name": "api-secret-abcde", "namespace": "openshift-config" },
            "type": "kubernetes.io/tls"
        }))
        .unwrap();

        assert_eq!(resource.kind(), "Secret");
        assert_eq!(resource.name(), Some("api-secret-abcde"));
        assert_eq!(resource.namespace(), Some("openshift-config"));
    }

    #[test]
    fn test_from_value_status() {
        let resource = ClusterResource::from_value(json!({
            "apiVersion": "v1",
            "kind": "Status",
            "status": "Failure",
            "message": "oauthclients \"x\" not found",
            "reason": "NotFound",
            "code": 404
        }))
        .unwrap();

        match resource {
            ClusterResource::Status(status) => {
                assert_eq!(status.code, 404);
                assert_eq!(status.reason, "NotFound");
            }
            other => panic!("unexpected resource {:?}", other),
        }
    }

    #[test]
    fn test_from_value_same_kind_other_group() {
        let err = ClusterResource::from_value(json!({
            "apiVersion": "networking.k8s.io/v1",
            "kind": "Ingress",
            "metadata": { "name": "web" }
        }))
        .unwrap_err();

        assert!(matches!(err, SetupError::UnknownResource { .. }));
    }

    #[test]
    fn test_from_value_missing_kind() {
        let err = ClusterResource::from_value(json!({ "metadata": {} })).unwrap_err();
        assert!(matches!(
            err,
            SetupError::UnknownResource { ref api_version, ref kind }
                if api_version.is_empty() && kind.is_empty()
        ));
    }
}
