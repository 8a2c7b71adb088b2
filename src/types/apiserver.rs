// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use crate::types::ingress::SecretNameReference;
use kube::CustomResource;
use serde::{Deserialize, Serialize};

/// `apiservers.config.openshift.io/cluster`
#[derive(
    CustomResource, Serialize, Deserialize, Clone, Debug, Default, PartialEq, schemars::JsonSchema,
)]
#[kube(
    group = "config.openshift.io",
    version = "v1",
    kind = "APIServer",
    root = "ApiServer",
    plural = "apiservers"
)]
#[serde(rename_all = "camelCase")]
pub struct ApiServerSpec {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub serving_certs: Option<ServingCerts>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ServingCerts {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub named_certificates: Option<Vec<NamedCertificate>>,
}

/// Serving certificate used for requests to one of `names`
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct NamedCertificate {
    pub names: Vec<String>,
    pub serving_certificate: SecretNameReference,
}

/// Body of a merge patch against the API server config
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ApiServerPatch {
    pub spec: ApiServerSpec,
}

impl ApiServer {
    pub fn named_certificates(&self) -> &[NamedCertificate] {
        self.spec
            .serving_certs
            .as_ref()
            .and_then(|c| c.named_certificates.as_deref())
            .unwrap_or_default()
    }
}
