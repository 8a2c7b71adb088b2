// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use crate::constants::{names, DEFAULT_BACKEND_PORT, SA_TOKEN_FILE};
use anyhow::{Context, Result};
use std::env;

/// Names of the cluster objects touched by the wizard
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClusterNames {
    /// Namespace where TLS secrets referenced by cluster config are created
    pub tls_secret_namespace: String,
    pub wizard_route: String,
    pub wizard_deployment: String,
    pub wizard_namespace: String,
    pub oauth_client: String,
    pub oauth_namespace: String,
    pub console_namespace: String,
}

impl Default for ClusterNames {
    fn default() -> Self {
        Self {
            tls_secret_namespace: names::TLS_SECRET_NAMESPACE.to_string(),
            wizard_route: names::WIZARD_ROUTE_NAME.to_string(),
            wizard_deployment: names::WIZARD_DEPLOYMENT_NAME.to_string(),
            wizard_namespace: names::WIZARD_NAMESPACE.to_string(),
            oauth_client: names::OAUTH_CLIENT_NAME.to_string(),
            oauth_namespace: names::OAUTH_NAMESPACE.to_string(),
            console_namespace: names::CONSOLE_NAMESPACE.to_string(),
        }
    }
}

/// Backend configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the cluster API server
    pub cluster_api_url: String,
    pub backend_port: u16,
    /// Token used for liveness pings; user requests carry their own token
    pub service_token: Option<String>,
    pub insecure_skip_tls_verify: bool,
    pub names: ClusterNames,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        let backend_port = match env::var("BACKEND_PORT") {
            Ok(port) => port
                .parse()
                .with_context(|| format!("BACKEND_PORT is not a valid port: {}", port))?,
            Err(_) => DEFAULT_BACKEND_PORT,
        };
        let insecure_skip_tls_verify: bool = env::var("INSECURE_SKIP_TLS_VERIFY")
            .unwrap_or("true".to_string())
            .parse()
            .unwrap_or(true);

        Ok(Config {
            cluster_api_url: cluster_api_url(
                env::var("CLUSTER_API_URL").ok(),
                env::var("KUBERNETES_SERVICE_HOST").ok(),
                env::var("KUBERNETES_SERVICE_PORT").ok(),
            ),
            backend_port,
            service_token: service_token(std::fs::read_to_string(SA_TOKEN_FILE).ok()),
            insecure_skip_tls_verify,
            names: ClusterNames::default(),
        })
    }
}

/// An explicit API URL wins, otherwise the in-cluster service address is used
fn cluster_api_url(
    explicit: Option<String>,
    host: Option<String>,
    port: Option<String>,
) -> String {
    if let Some(url) = explicit.filter(|u| !u.is_empty()) {
        return url;
    }
    format!(
        "https://{}:{}",
        host.unwrap_or_else(|| "missing-KUBERNETES_SERVICE_HOST".to_string()),
        port.unwrap_or_else(|| "missing-KUBERNETES_SERVICE_PORT".to_string())
    )
}

fn service_token(from_file: Option<String>) -> Option<String> {
    from_file
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
        .or_else(|| env::var("TOKEN").ok().filter(|t| !t.is_empty()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cluster_api_url_prefers_explicit() {
        let url = cluster_api_url(
            Some("https://api.example.com:6443".to_string()),
            Some("10.0.0.1".to_string()),
            Some("443".to_string()),
        );
        assert_eq!(url, "https://api.example.com:6443");
    }

    #[test]
    fn test_cluster_api_url_from_service_env() {
        let url = cluster_api_url(None, Some("10.0.0.1".to_string()), Some("443".to_string()));
        assert_eq!(url, "https://10.0.0.1:443");
    }

    #[test]
    fn test_cluster_api_url_marks_missing_parts() {
        let url = cluster_api_url(Some(String::new()), None, None);
        assert_eq!(
            url,
            "https://missing-KUBERNETES_SERVICE_HOST:missing-KUBERNETES_SERVICE_PORT"
        );
    }

    #[test]
    fn test_service_token_from_file_is_trimmed() {
        assert_eq!(service_token(Some("abc\n".to_string())), Some("abc".to_string()));
    }

    #[test]
    fn test_default_names() {
        let names = ClusterNames::default();
        assert_eq!(names.tls_secret_namespace, "openshift-config");
        assert_eq!(names.oauth_client, "ztpfwoauth");
        assert_eq!(names.wizard_route, "ztpfw-ui");
    }
}
