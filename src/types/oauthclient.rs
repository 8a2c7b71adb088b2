// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use kube::api::ObjectMeta;
use serde::{Deserialize, Serialize};

/// `oauth.openshift.io/v1` OAuthClient. Unlike most resources it has no
/// spec; its fields sit at the top level.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OAuthClient {
    #[serde(default)]
    pub metadata: ObjectMeta,
    #[serde(rename = "redirectURIs", skip_serializing_if = "Option::is_none")]
    pub redirect_uris: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secret: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grant_method: Option<String>,
}

impl k8s_openapi::Resource for OAuthClient {
    const API_VERSION: &'static str = "oauth.openshift.io/v1";
    const GROUP: &'static str = "oauth.openshift.io";
    const KIND: &'static str = "OAuthClient";
    const VERSION: &'static str = "v1";
    const URL_PATH_SEGMENT: &'static str = "oauthclients";
    type Scope = k8s_openapi::ClusterResourceScope;
}

impl k8s_openapi::Metadata for OAuthClient {
    type Ty = ObjectMeta;

    fn metadata(&self) -> &ObjectMeta {
        &self.metadata
    }

    fn metadata_mut(&mut self) -> &mut ObjectMeta {
        &mut self.metadata
    }
}

impl OAuthClient {
    pub fn has_redirect_uri(&self, uri: &str) -> bool {
        self.redirect_uris
            .as_ref()
            .is_some_and(|uris| uris.iter().any(|u| u == uri))
    }
}
